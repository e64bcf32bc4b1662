use askama::Template;

use super::render_either;
use crate::presentation::{ViewError, ViewFormat};

#[derive(Template)]
#[template(path = "text/processor.txt")]
pub struct ProcessorTextTemplate;

#[derive(Template)]
#[template(path = "html/processor.html")]
pub struct ProcessorHtmlTemplate;

#[derive(Template)]
#[template(path = "text/login.txt")]
pub struct LoginTextTemplate;

#[derive(Template)]
#[template(path = "html/login.html")]
pub struct LoginHtmlTemplate;

pub(super) fn processor(format: ViewFormat) -> Result<String, ViewError> {
    render_either(format, || ProcessorTextTemplate, || ProcessorHtmlTemplate)
}

pub(super) fn login(format: ViewFormat) -> Result<String, ViewError> {
    render_either(format, || LoginTextTemplate, || LoginHtmlTemplate)
}
