use serde::Serialize;

/// Administrative/funding category of a school ("dependencia").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    ParticularPagado,
    ParticularSubvencionado,
    Municipal,
    ServicioLocal,
    AdministracionDelegada,
}

impl Ownership {
    pub const ALL: [Ownership; 5] = [
        Ownership::ParticularPagado,
        Ownership::ParticularSubvencionado,
        Ownership::Municipal,
        Ownership::ServicioLocal,
        Ownership::AdministracionDelegada,
    ];

    pub fn canonical_name(self) -> &'static str {
        match self {
            Ownership::ParticularPagado => "Particular Pagado",
            Ownership::ParticularSubvencionado => "Particular Subvencionado",
            Ownership::Municipal => "Municipal",
            Ownership::ServicioLocal => "Serv. Local Educación",
            Ownership::AdministracionDelegada => "Corp. Administración Delegada",
        }
    }

    pub fn style_class(self) -> &'static str {
        match self {
            Ownership::ParticularPagado => "particular-pagado",
            Ownership::ParticularSubvencionado => "particular-subvencionado",
            Ownership::Municipal => "municipal",
            Ownership::ServicioLocal => "slep",
            Ownership::AdministracionDelegada => "admin-delegada",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Ownership::ParticularPagado => "#E63946",
            Ownership::ParticularSubvencionado => "#457B9D",
            Ownership::Municipal => "#2A9D8F",
            Ownership::ServicioLocal => "#E9C46A",
            Ownership::AdministracionDelegada => "#9B5DE5",
        }
    }
}

/// Style class used for codes outside the known table.
pub const FALLBACK_STYLE_CLASS: &str = "particular-subvencionado";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipCode<'a> {
    Known {
        ownership: Ownership,
        short_label: &'static str,
    },
    /// Unseen category: keeps its original text, borrows the default style.
    Unrecognized(&'a str),
}

impl<'a> OwnershipCode<'a> {
    pub fn parse(code: &'a str) -> Self {
        let (ownership, short_label) = match code {
            "Particular Pagado" => (Ownership::ParticularPagado, "Part. Pagado"),
            "Particular Subvencionado" => (Ownership::ParticularSubvencionado, "Part. Subv."),
            "Municipal" => (Ownership::Municipal, "Municipal"),
            "Serv. Local Educación" | "SLEP" => (Ownership::ServicioLocal, "SLEP"),
            "Corp. Administración Delegada" => {
                (Ownership::AdministracionDelegada, "Corp. Adm. Deleg.")
            }
            "Administración Delegada" => (Ownership::AdministracionDelegada, "Adm. Deleg."),
            other => return OwnershipCode::Unrecognized(other),
        };
        OwnershipCode::Known {
            ownership,
            short_label,
        }
    }

    pub fn ownership(&self) -> Option<Ownership> {
        match self {
            OwnershipCode::Known { ownership, .. } => Some(*ownership),
            OwnershipCode::Unrecognized(_) => None,
        }
    }

    pub fn short_label(&self) -> &'a str {
        match self {
            OwnershipCode::Known { short_label, .. } => *short_label,
            OwnershipCode::Unrecognized(raw) => *raw,
        }
    }

    pub fn style_class(&self) -> &'static str {
        match self {
            OwnershipCode::Known { ownership, .. } => ownership.style_class(),
            OwnershipCode::Unrecognized(_) => FALLBACK_STYLE_CLASS,
        }
    }
}

pub fn short_label(code: &str) -> &str {
    OwnershipCode::parse(code).short_label()
}

pub fn style_class(code: &str) -> &'static str {
    OwnershipCode::parse(code).style_class()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/ownership.rs"]
mod tests;
