//! Módulo `excel`: lectura del export de Programas del SNIES.
//!
//! Submódulos:
//! - `io`: conversión de celdas de calamine a texto/número
//! - `programas`: lectura de la hoja y resolución de columnas

/// Helpers de celdas
pub mod io;

/// Lectura del export de programas: `leer_programas_excel`
pub mod programas;

pub use programas::{leer_programas_excel, parsear_filas};

/// Ruta por defecto del export (relativa a la raíz del proyecto)
pub const RUTA_ENTRADA_POR_DEFECTO: &str = "scripts/in/Programas.xlsx";
