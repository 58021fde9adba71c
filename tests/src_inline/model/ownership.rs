use super::*;

#[test]
fn test_canonical_codes() {
    assert_eq!(short_label("Particular Pagado"), "Part. Pagado");
    assert_eq!(style_class("Particular Pagado"), "particular-pagado");
    assert_eq!(short_label("Particular Subvencionado"), "Part. Subv.");
    assert_eq!(style_class("Municipal"), "municipal");
    assert_eq!(short_label("Municipal"), "Municipal");
    assert_eq!(short_label("Serv. Local Educación"), "SLEP");
    assert_eq!(style_class("Corp. Administración Delegada"), "admin-delegada");
    assert_eq!(short_label("Corp. Administración Delegada"), "Corp. Adm. Deleg.");
}

#[test]
fn test_legacy_aliases() {
    assert_eq!(style_class("SLEP"), "slep");
    assert_eq!(short_label("SLEP"), "SLEP");
    assert_eq!(
        OwnershipCode::parse("SLEP").ownership(),
        Some(Ownership::ServicioLocal)
    );
    assert_eq!(style_class("Administración Delegada"), "admin-delegada");
    assert_eq!(short_label("Administración Delegada"), "Adm. Deleg.");
}

#[test]
fn test_unknown_code_fallback() {
    let code = OwnershipCode::parse("Unknown Type");
    assert_eq!(code, OwnershipCode::Unrecognized("Unknown Type"));
    assert_eq!(code.ownership(), None);
    assert_eq!(short_label("Unknown Type"), "Unknown Type");
    assert_eq!(style_class("Unknown Type"), "particular-subvencionado");
}

#[test]
fn test_lookup_is_exact() {
    assert_eq!(style_class("municipal"), FALLBACK_STYLE_CLASS);
    assert_eq!(short_label(""), "");
}

#[test]
fn test_palette() {
    assert_eq!(Ownership::ParticularPagado.color(), "#E63946");
    assert_eq!(Ownership::AdministracionDelegada.color(), "#9B5DE5");
    assert_eq!(
        Ownership::ServicioLocal.canonical_name(),
        "Serv. Local Educación"
    );
}

#[test]
fn test_canonical_names_round_trip() {
    for ownership in Ownership::ALL {
        let parsed = OwnershipCode::parse(ownership.canonical_name());
        assert_eq!(parsed.ownership(), Some(ownership));
        assert_eq!(parsed.style_class(), ownership.style_class());
    }
}
