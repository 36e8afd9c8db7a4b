use serde::Deserialize;

/// Supported report languages, keyed by two-letter code in the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

/// Every user-facing report string, resolved at compile time. The renderer
/// performs no translation logic and no runtime key lookups that could
/// fail silently.
#[derive(Debug, Clone, Copy)]
pub struct ReportStrings {
    pub title: &'static str,
    pub date_label: &'static str,
    pub section_summary: &'static str,
    pub section_details: &'static str,
    pub total_initial: &'static str,
    pub total_removed: &'static str,
    pub total_final: &'static str,
    pub header_ip: &'static str,
    pub header_status: &'static str,
    pub status_revoked: &'static str,
    pub status_maintained: &'static str,
    pub conclusion: &'static str,
}

const ES: ReportStrings = ReportStrings {
    title: "Reporte de Auditoría de Acceso Restringido",
    date_label: "Fecha de Generación:",
    section_summary: "1. Resumen Ejecutivo de la Auditoría",
    section_details: "2. Detalle de IPs Revocadas",
    total_initial: "Total de IPs Iniciales:",
    total_removed: "Total de IPs Eliminadas:",
    total_final: "Total de IPs Finales:",
    header_ip: "IP Revocada",
    header_status: "Estado",
    status_revoked: "REVOCADA (Coincidencia)",
    status_maintained: "Mantenida",
    conclusion: "La herramienta ejecutó la revocación de acceso según lo planificado, \
                 garantizando el principio de mínimo privilegio y el cumplimiento normativo.",
};

const EN: ReportStrings = ReportStrings {
    title: "Restricted Access Audit Report",
    date_label: "Generation Date:",
    section_summary: "1. Executive Audit Summary",
    section_details: "2. Revoked IPs Detail",
    total_initial: "Total Initial IPs:",
    total_removed: "Total Removed IPs:",
    total_final: "Total Final IPs:",
    header_ip: "Revoked IP",
    header_status: "Status",
    status_revoked: "REVOKED (Match Found)",
    status_maintained: "Maintained",
    conclusion: "The tool executed access revocation as planned, ensuring the principle \
                 of least privilege and regulatory compliance.",
};

impl Locale {
    pub fn strings(self) -> &'static ReportStrings {
        match self {
            Locale::Es => &ES,
            Locale::En => &EN,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }
}
