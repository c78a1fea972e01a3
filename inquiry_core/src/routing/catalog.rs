//! Per-category router tables.
//!
//! Question text and priority order are fixed domain data. The order
//! within a table matters: the first affirmative answer wins.

use crate::routing::{FlowLabel, RouterTable};

/// The subcategory router of a category flow, if it has one.
///
/// `HongosMicrobios` narrows directly within its majority group, and
/// terminal labels never reach a pool, so neither carries a table.
pub fn router_for(label: FlowLabel) -> Option<RouterTable> {
    match label {
        FlowLabel::Personas => Some(RouterTable::new(
            "— Router de subcategorías (Personas) —",
            &[
                ("Personajes", "¿Es un personaje específico (real o de ficción)?"),
                ("Profesiones", "¿Se refiere a una profesión u oficio?"),
                ("Culturales", "¿Es una identidad cultural o étnica (maya, vikingo…)?"),
                ("Roles", "¿Es un rol social (alumno, jefe, voluntario…)?"),
                ("Colectivos", "¿Es un colectivo humano (familia, tribu, nación…)?"),
            ],
        )),
        FlowLabel::Conceptos => Some(RouterTable::new(
            "— Router de subcategorías (Conceptos) —",
            &[
                ("Emociones", "¿Es un sentimiento o emoción (amor, miedo, tristeza…)?"),
                ("Valores", "¿Es un valor o principio (justicia, libertad…)?"),
                ("Cualidades", "¿Es una cualidad o atributo (belleza, inteligencia…)?"),
                ("Fenomenos", "¿Es un fenómeno universal (tiempo, espacio…)?"),
                ("Ideas", "¿Es una idea o constructo social (democracia, religión…)?"),
                ("Eventos", "¿Es un evento o hecho abstracto (guerra, cambio…)?"),
            ],
        )),
        FlowLabel::Adjetivos => Some(RouterTable::new(
            "— Router de subcategorías (Adjetivos) —",
            &[
                ("Colores", "¿Es un color?"),
                ("Cualitativos", "¿Es una cualidad (grande, fuerte, claro…)?"),
                ("Cuantitativos", "¿Indica cantidad (muchos, pocos, doble…)?"),
                ("Relacionales", "¿Indica pertenencia o ámbito (mexicano, digital, escolar…)?"),
                ("Posesivos", "¿Es un posesivo (mi, tu, su, nuestro…)?"),
            ],
        )),
        FlowLabel::Animales => Some(RouterTable::new(
            "— Router de subcategorías (Animales) —",
            &[("Moluscos", "¿Es un molusco (caracol, almeja, pulpo…)?")],
        )),
        FlowLabel::Objetos => Some(RouterTable::new(
            "— Router de subcategorías (Objetos) —",
            &[
                ("Tecnologia", "¿Es tecnología o un electrónico?"),
                ("Muebles", "¿Se usa en casa (mueble o enser)?"),
                ("Herramientas", "¿Es una herramienta o utensilio?"),
                ("Vehiculos", "¿Es un vehículo?"),
                ("Ropa", "¿Es ropa o un accesorio?"),
            ],
        )),
        FlowLabel::Lugares => Some(RouterTable::new(
            "— Router de subcategorías (Lugares) —",
            &[
                ("Naturales", "¿Es un lugar natural (río, bosque, montaña…)?"),
                ("Artificiales", "¿Es un lugar hecho por humanos (ciudad, país, edificio…)?"),
            ],
        )),
        FlowLabel::Verbos => Some(RouterTable::new(
            "— Router de subcategorías (Verbos) —",
            &[("Verbo", "¿Es un verbo en infinitivo?")],
        )),
        FlowLabel::HongosMicrobios
        | FlowLabel::Plantas
        | FlowLabel::DescartadoVivos
        | FlowLabel::NoClasificado => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personas_priority_order() {
        let table = router_for(FlowLabel::Personas).unwrap();
        let groups: Vec<_> = table.entries.iter().map(|e| e.group.as_str()).collect();
        assert_eq!(
            groups,
            vec!["Personajes", "Profesiones", "Culturales", "Roles", "Colectivos"]
        );
    }

    #[test]
    fn test_category_flows_with_routers_have_entries() {
        for label in [
            FlowLabel::Personas,
            FlowLabel::Conceptos,
            FlowLabel::Adjetivos,
            FlowLabel::Animales,
            FlowLabel::Objetos,
            FlowLabel::Lugares,
            FlowLabel::Verbos,
        ] {
            let table = router_for(label).unwrap();
            assert!(!table.entries.is_empty(), "label {:?}", label);
        }
    }

    #[test]
    fn test_labels_without_routers() {
        assert!(router_for(FlowLabel::HongosMicrobios).is_none());
        assert!(router_for(FlowLabel::Plantas).is_none());
        assert!(router_for(FlowLabel::NoClasificado).is_none());
    }
}
