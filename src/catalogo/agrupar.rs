use std::collections::HashMap;

use crate::models::FilaPrograma;
use crate::normalizacion::limpiar_codigo;

/// Filas de una misma institución, en el orden en que aparecen en el export.
#[derive(Debug)]
pub struct GrupoInstitucion<'a> {
    pub codigo: String,
    pub filas: Vec<&'a FilaPrograma>,
}

/// Agrupa por código de institución (ya limpio) preservando el orden de
/// primera aparición de cada código. No se ordena nada.
pub fn agrupar_por_institucion(filas: &[FilaPrograma]) -> Vec<GrupoInstitucion<'_>> {
    let mut grupos: Vec<GrupoInstitucion<'_>> = Vec::new();
    let mut posicion: HashMap<String, usize> = HashMap::new();

    for fila in filas {
        let codigo = limpiar_codigo(&fila.codigo_institucion);
        match posicion.get(&codigo) {
            Some(&i) => grupos[i].filas.push(fila),
            None => {
                posicion.insert(codigo.clone(), grupos.len());
                grupos.push(GrupoInstitucion { codigo, filas: vec![fila] });
            }
        }
    }
    grupos
}

/// Moda estadística. En empate gana el valor que apareció primero.
/// `None` sólo si no hay valores.
pub fn moda<'a, I>(valores: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut conteos: HashMap<&'a str, usize> = HashMap::new();
    let mut orden: Vec<&'a str> = Vec::new();

    for v in valores {
        let c = conteos.entry(v).or_insert(0);
        if *c == 0 {
            orden.push(v);
        }
        *c += 1;
    }

    let mut mejor: Option<(&'a str, usize)> = None;
    for v in orden {
        let c = conteos[v];
        match mejor {
            Some((_, mc)) if mc >= c => {}
            _ => mejor = Some((v, c)),
        }
    }
    mejor.map(|(v, _)| v)
}
