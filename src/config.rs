use std::path::PathBuf;

use clap::Parser;

use crate::catalogo::SITIO_WEB_RESPALDO;
use crate::excel::RUTA_ENTRADA_POR_DEFECTO;
use crate::salida::RUTA_SALIDA_POR_DEFECTO;

/// Genera el catálogo JSON de instituciones y programas desde el export del SNIES.
///
/// Sin argumentos lee `scripts/in/Programas.xlsx` y escribe
/// `src/data/universities.json`, ambos relativos al directorio actual.
#[derive(Debug, Parser)]
#[command(name = "catalogo_snies", version, about)]
pub struct Args {
    /// Archivo Excel de programas
    #[arg(long, env = "CATALOGO_ENTRADA", default_value = RUTA_ENTRADA_POR_DEFECTO)]
    pub entrada: PathBuf,

    /// Archivo JSON de salida
    #[arg(long, env = "CATALOGO_SALIDA", default_value = RUTA_SALIDA_POR_DEFECTO)]
    pub salida: PathBuf,

    /// Hoja a leer (por defecto la primera del libro)
    #[arg(long, env = "CATALOGO_HOJA")]
    pub hoja: Option<String>,

    /// URL asignada como sitio web de cada institución
    #[arg(long = "sitio-web", env = "CATALOGO_SITIO_WEB", default_value = SITIO_WEB_RESPALDO)]
    pub sitio_web: String,

    /// Listado de programas SENA (JSON) a integrar como una institución más
    #[arg(long, env = "CATALOGO_SENA")]
    pub sena: Option<PathBuf>,

    /// Indenta el JSON con dos espacios
    #[arg(long)]
    pub pretty: bool,
}

/// Configuración resuelta de una ejecución.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub entrada: PathBuf,
    pub salida: PathBuf,
    pub hoja: Option<String>,
    pub sitio_web: String,
    pub sena: Option<PathBuf>,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            entrada: PathBuf::from(RUTA_ENTRADA_POR_DEFECTO),
            salida: PathBuf::from(RUTA_SALIDA_POR_DEFECTO),
            hoja: None,
            sitio_web: SITIO_WEB_RESPALDO.to_string(),
            sena: None,
            pretty: false,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            entrada: args.entrada,
            salida: args.salida,
            hoja: args.hoja.filter(|h| !h.trim().is_empty()),
            sitio_web: args.sitio_web,
            sena: args.sena,
            pretty: args.pretty,
        }
    }
}
