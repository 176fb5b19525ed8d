#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Celda de un libro de prueba.
#[derive(Debug, Clone)]
pub enum Celda {
    Texto(String),
    Numero(f64),
    Vacia,
}

pub fn t(s: &str) -> Celda {
    Celda::Texto(s.to_string())
}

pub fn n(v: f64) -> Celda {
    Celda::Numero(v)
}

pub const ENCABEZADOS_SNIES: [&str; 13] = [
    "CÓDIGO_INSTITUCIÓN",
    "NOMBRE_INSTITUCIÓN",
    "SECTOR",
    "DEPARTAMENTO_OFERTA_PROGRAMA",
    "MUNICIPIO_OFERTA_PROGRAMA",
    "NOMBRE_DEL_PROGRAMA",
    "CÓDIGO_SNIES_DEL_PROGRAMA",
    "NIVEL_DE_FORMACIÓN",
    "MODALIDAD",
    "ÁREA_DE_CONOCIMIENTO",
    "NÚMERO_PERIODOS_DE_DURACIÓN",
    "PERIODICIDAD",
    "COSTO_MATRÍCULA_ESTUD_NUEVOS",
];

/// Encabezados con espacios alrededor, como vienen en algunos exports.
pub fn encabezados() -> Vec<Celda> {
    ENCABEZADOS_SNIES.iter().map(|h| t(&format!(" {} ", h))).collect()
}

/// Fila de programa con los campos más usados en las pruebas; el resto queda
/// con valores típicos del export.
pub struct FilaFixture<'a> {
    pub codigo: Celda,
    pub institucion: &'a str,
    pub sector: &'a str,
    pub departamento: &'a str,
    pub municipio: &'a str,
    pub programa: &'a str,
    pub codigo_programa: Celda,
    pub nivel: &'a str,
    pub modalidad: &'a str,
    pub area: &'a str,
    pub periodos: Celda,
    pub periodicidad: &'a str,
    pub costo: Celda,
}

impl<'a> FilaFixture<'a> {
    pub fn new(codigo: f64, institucion: &'a str, programa: &'a str, codigo_programa: f64) -> Self {
        FilaFixture {
            codigo: n(codigo),
            institucion,
            sector: "Privada",
            departamento: "Bogotá D.C.",
            municipio: "Bogotá D.C.",
            programa,
            codigo_programa: n(codigo_programa),
            nivel: "Universitaria",
            modalidad: "Presencial",
            area: "Ingeniería, arquitectura, urbanismo y afines",
            periodos: n(10.0),
            periodicidad: "Semestral",
            costo: n(4_500_000.0),
        }
    }

    pub fn celdas(&self) -> Vec<Celda> {
        vec![
            self.codigo.clone(),
            t(self.institucion),
            t(self.sector),
            t(self.departamento),
            t(self.municipio),
            t(self.programa),
            self.codigo_programa.clone(),
            t(self.nivel),
            t(self.modalidad),
            t(self.area),
            self.periodos.clone(),
            t(self.periodicidad),
            self.costo.clone(),
        ]
    }
}

fn letra_columna(mut idx: usize) -> String {
    let mut s = String::new();
    loop {
        s.insert(0, (b'A' + (idx % 26) as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    s
}

fn escapar_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn hoja_xml(filas: &[Vec<Celda>]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (i, fila) in filas.iter().enumerate() {
        let r = i + 1;
        xml.push_str(&format!(r#"<row r="{}">"#, r));
        for (j, celda) in fila.iter().enumerate() {
            let referencia = format!("{}{}", letra_columna(j), r);
            match celda {
                Celda::Texto(s) => xml.push_str(&format!(
                    r#"<c r="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    referencia,
                    escapar_xml(s)
                )),
                Celda::Numero(v) => xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, referencia, v)),
                Celda::Vacia => {}
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Escribe un .xlsx mínimo (una hoja, celdas inline) que calamine puede leer.
pub fn escribir_xlsx(ruta: &Path, nombre_hoja: &str, filas: &[Vec<Celda>]) {
    if let Some(dir) = ruta.parent() {
        fs::create_dir_all(dir).expect("crear directorio del fixture");
    }
    let archivo = fs::File::create(ruta).expect("crear xlsx");
    let mut zip = ZipWriter::new(archivo);
    let opciones = FileOptions::default().compression_method(CompressionMethod::Stored);

    let content_types = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;
    let rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;
    let workbook = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#,
        escapar_xml(nombre_hoja)
    );
    let workbook_rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#;

    let partes = [
        ("[Content_Types].xml", content_types.to_string()),
        ("_rels/.rels", rels.to_string()),
        ("xl/workbook.xml", workbook),
        ("xl/_rels/workbook.xml.rels", workbook_rels.to_string()),
        ("xl/worksheets/sheet1.xml", hoja_xml(filas)),
    ];
    for (nombre, contenido) in partes.iter() {
        zip.start_file(*nombre, opciones).expect("iniciar entrada zip");
        zip.write_all(contenido.as_bytes()).expect("escribir entrada zip");
    }
    zip.finish().expect("cerrar xlsx");
}

/// Escribe un libro con encabezados SNIES más las filas dadas.
pub fn escribir_programas_xlsx(ruta: &Path, filas: &[FilaFixture<'_>]) {
    let mut tabla = vec![encabezados()];
    tabla.extend(filas.iter().map(|f| f.celdas()));
    escribir_xlsx(ruta, "Programas", &tabla);
}
