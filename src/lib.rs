// Biblioteca raíz del crate `catalogo_snies`.
// Reexporta los módulos del pipeline y la función `ejecutar` que lo orquesta.
pub mod catalogo;
pub mod config;
pub mod error;
pub mod excel;
pub mod logging;
pub mod models;
pub mod normalizacion;
pub mod pipeline;
pub mod salida;
pub mod sena;

pub use config::{Args, Config};
pub use error::{CatalogoError, CatalogoResult};
pub use pipeline::{ejecutar, Resumen};
