// --- Generador del catálogo de universidades - Archivo principal ---

use anyhow::Context;
use catalogo_snies::logging::init_logging;
use catalogo_snies::{ejecutar, Args, Config};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    init_logging();

    let config = Config::from(Args::parse());
    let resumen = ejecutar(&config)
        .with_context(|| format!("no se pudo generar {}", config.salida.display()))?;

    println!("✅ universities.json generado: {}", config.salida.display());
    println!("Instituciones: {} | Programas: {}", resumen.instituciones, resumen.programas);
    if resumen.programas_sena > 0 {
        println!("SENA integrado (programas: {})", resumen.programas_sena);
    }
    Ok(())
}
