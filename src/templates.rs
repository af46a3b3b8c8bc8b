//! Tera template engine setup.
//!
//! Templates are embedded in the binary at compile time; there are no
//! on-disk assets to deploy alongside it.

use tera::Tera;

use crate::error::AppError;

/// Name of the home page template.
pub const HOME_TEMPLATE: &str = "home.html";

/// Initialize the Tera template engine with the embedded templates.
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(HOME_TEMPLATE, include_str!("../templates/home.html"))?;
    Ok(tera)
}
