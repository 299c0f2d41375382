pub mod form;
pub mod meeting;
