use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn pages_count(&self) -> i32;
    fn author_name(&self) -> String;
}
