// ============================================================================
// TsCat - Spanish Translation Table
// ============================================================================
//
// File: src/i18n/es_es.rs
// Responsibility: Spanish console message definitions
// Boundaries:
//   - ✅ Spanish translation strings definition
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// Spanish translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Errores
    ("error.load_catalog", "No se pudo cargar el catálogo: {}"),
    ("error.write_catalog", "No se pudo escribir el catálogo: {}"),
    // Consulta
    ("lookup.status", "Estado: {}"),
    ("lookup.developer_note", "Nota del desarrollador: {}"),
    (
        "lookup.not_found",
        "No hay entrada, se muestra el texto original",
    ),
    // Estadísticas
    ("stats.scanning", "Buscando catálogos en {}"),
    ("stats.no_catalogs", "No se encontraron catálogos de traducción"),
    // Comprobación
    ("cli.check.start", "Comprobando catálogo: {}"),
    (
        "check.failed",
        "La comprobación falló: {} errores, {} avisos",
    ),
    ("check.all_good", "El catálogo está limpio"),
    (
        "check.passed_with_warnings",
        "Comprobación superada con {} avisos",
    ),
    // Fusión
    (
        "merge.new_catalog",
        "{} todavía no existe, se crea un catálogo nuevo",
    ),
    ("merge.written", "Catálogo fusionado escrito en {}"),
    (
        "merge.translate_hint",
        "Los mensajes nuevos quedan sin terminar y necesitan traducción",
    ),
    // Normalización
    ("normalize.would_change", "{} no está en formato canónico"),
    ("normalize.already_normalized", "El catálogo ya está normalizado"),
    ("normalize.written", "Catálogo normalizado escrito en {}"),
    // Inicialización
    ("init.start", "Creando archivo de configuración..."),
    ("init.config_exists", "El archivo de configuración ya existe: {}"),
    ("init.use_force_hint", "Usa --force para sobrescribirlo"),
    ("init.config_created", "Archivo de configuración creado: {}"),
    (
        "init.create_failed",
        "No se pudo crear el archivo de configuración: {}",
    ),
    // Diagnósticos
    (
        "diagnostic.duplicate_key",
        "entrada duplicada, gana la última",
    ),
    ("diagnostic.empty_translation", "terminada pero vacía"),
    ("diagnostic.placeholder_mismatch", "los marcadores no coinciden"),
    (
        "diagnostic.whitespace_mismatch",
        "los espacios iniciales o finales no coinciden",
    ),
    (
        "diagnostic.punctuation_mismatch",
        "la puntuación final no coincide",
    ),
    (
        "diagnostic.numerus_form_count",
        "número incorrecto de formas plurales",
    ),
    // Resumen
    ("summary.catalog_stats", "Estadísticas de catálogos"),
    ("summary.context_stats", "Estadísticas por contexto"),
    ("summary.total", "Total"),
    (
        "summary.counts",
        "{} terminadas, {} sin terminar, {} obsoletas",
    ),
    ("summary.load_failed", "no se pudo leer: {}"),
    ("summary.failed_files", "{} archivos no se pudieron leer"),
    ("summary.diagnostics", "Diagnósticos"),
    ("summary.merge", "Resultado de la fusión"),
    ("summary.merge_kept", "Traducciones conservadas: {}"),
    ("summary.merge_added", "Mensajes nuevos: {}"),
    ("summary.merge_obsoleted", "Marcados como obsoletos: {}"),
    ("summary.merge_dropped", "Descartados: {}"),
];
