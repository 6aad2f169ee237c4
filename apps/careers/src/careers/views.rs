//! Askama view models for the HTML pages. Templates live in `templates/`.

use askama::Template;

use crate::careers::form::NewCareer;
use crate::models::career::{CareerDocument, CareerRecord};

pub const APP_TITLE: &str = "🎓 Career Counselling App";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Home,
    ViewCareerDetails,
    AddCareer,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [
        MenuItem::Home,
        MenuItem::ViewCareerDetails,
        MenuItem::AddCareer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Home => "Home",
            MenuItem::ViewCareerDetails => "View Career Details",
            MenuItem::AddCareer => "Add a Career",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            MenuItem::Home => "/",
            MenuItem::ViewCareerDetails => "/details",
            MenuItem::AddCareer => "/add",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

pub fn menu(active: MenuItem) -> Vec<MenuLink> {
    MenuItem::ALL
        .iter()
        .map(|&item| MenuLink {
            label: item.label(),
            href: item.href(),
            active: item == active,
        })
        .collect()
}

#[derive(Debug, Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub title: &'static str,
    pub menu: Vec<MenuLink>,
    pub careers: Vec<String>,
}

impl HomePage {
    pub fn new(document: &CareerDocument) -> Self {
        Self {
            title: APP_TITLE,
            menu: menu(MenuItem::Home),
            careers: document.names().map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectOption {
    pub name: String,
    pub selected: bool,
}

/// Fields of one career as shown on the details page.
#[derive(Debug, Clone)]
pub struct CareerDetails {
    pub description: String,
    pub salary: String,
    pub opportunities: String,
    pub future_prospects: String,
    pub universities: String,
}

impl From<&CareerRecord> for CareerDetails {
    fn from(record: &CareerRecord) -> Self {
        Self {
            description: record.description.clone(),
            salary: record.salary.clone(),
            opportunities: record.opportunities_display(),
            future_prospects: record.future_prospects.clone(),
            universities: record.universities_display(),
        }
    }
}

#[derive(Debug, Template)]
#[template(path = "details.html")]
pub struct DetailsPage {
    pub title: &'static str,
    pub menu: Vec<MenuLink>,
    pub options: Vec<SelectOption>,
    pub details: Option<CareerDetails>,
    pub error: String,
}

impl DetailsPage {
    /// Without a requested name the first career is shown. `Err` carries the
    /// page for a name that is not in the document.
    pub fn new(document: &CareerDocument, requested: Option<&str>) -> Result<Self, Self> {
        let selected = requested.or_else(|| document.names().next());
        let options = document
            .names()
            .map(|name| SelectOption {
                name: name.to_string(),
                selected: Some(name) == selected,
            })
            .collect();
        let details = selected.and_then(|name| document.get(name)).map(CareerDetails::from);

        let mut page = Self {
            title: APP_TITLE,
            menu: menu(MenuItem::ViewCareerDetails),
            options,
            details,
            error: String::new(),
        };
        if selected.is_some() && page.details.is_none() {
            page.error = "Career not found.".to_string();
            return Err(page);
        }
        Ok(page)
    }
}

#[derive(Debug, Template)]
#[template(path = "add.html")]
pub struct AddPage {
    pub title: &'static str,
    pub menu: Vec<MenuLink>,
    pub form: NewCareer,
    pub error: String,
    pub success: String,
}

impl AddPage {
    pub fn blank() -> Self {
        Self {
            title: APP_TITLE,
            menu: menu(MenuItem::AddCareer),
            form: NewCareer::default(),
            error: String::new(),
            success: String::new(),
        }
    }

    pub fn added(message: String) -> Self {
        Self {
            success: message,
            ..Self::blank()
        }
    }

    /// Keeps the submitted values so the user can correct them.
    pub fn rejected(form: NewCareer, error: String) -> Self {
        Self {
            form,
            error,
            ..Self::blank()
        }
    }
}
