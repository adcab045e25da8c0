//! Núcleo del catálogo de Tonal: entidades, DTOs y los mappers entre ambos.
//!
//! Los mappers ([`mapper`]) son funciones puras y totales; el resto del crate
//! (config, port de repositorio y servicio) sólo los envuelve.

pub mod config;
pub mod domain;
pub mod dto;
pub mod errors;
pub mod mapper;
pub mod ports;
pub mod services;

pub use errors::{CoreError, ValidationError};
