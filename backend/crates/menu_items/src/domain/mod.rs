//! Domain layer: entity, value objects, repository trait

pub mod entity;
pub mod repository;
pub mod value_object;
