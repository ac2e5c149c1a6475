//! Authored guide content.
//!
//! Responsibilities:
//! - Define the section identifiers and the static section table.
//! - Hold the page header, the bonus tips and the closing message.
//!
//! Does NOT handle:
//! - Layout or styling (see `ui::guide`).
//! - Which section is expanded (see `selection`).
//!
//! Invariants:
//! - `SECTIONS` lists every `SectionId` exactly once, in display order.
//! - The table is compiled in and never changes at runtime.

use std::fmt;
use std::str::FromStr;

use crate::error::GuideError;

/// Identifier of one of the four guide sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Instruccion,
    Contexto,
    Datos,
    Output,
}

impl SectionId {
    /// All ids in display order.
    pub const ALL: [SectionId; 4] = [
        Self::Instruccion,
        Self::Contexto,
        Self::Datos,
        Self::Output,
    ];

    /// Stable identifier used by `App::select`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Instruccion => "instruccion",
            Self::Contexto => "contexto",
            Self::Datos => "datos",
            Self::Output => "output",
        }
    }

    /// Zero-based position in the section table.
    pub fn position(self) -> usize {
        match self {
            Self::Instruccion => 0,
            Self::Contexto => 1,
            Self::Datos => 2,
            Self::Output => 3,
        }
    }

    /// Look up a section by its one-based position (the digit keys).
    pub fn from_position(position: usize) -> Result<Self, GuideError> {
        position
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| GuideError::InvalidSectionId(position.to_string()))
    }

    /// The authored record for this id.
    pub fn section(self) -> &'static Section {
        &SECTIONS[self.position()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = GuideError;

    /// Ids match case-insensitively after trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GuideError::InvalidSectionId(wanted.to_string()))
    }
}

/// Illustrative payload attached to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionExample {
    /// A plain request next to a refined version of it.
    BasicVsImproved {
        basic: &'static str,
        improved: &'static str,
    },
    /// A pitfall and how to avoid it.
    ProblemSolution {
        problem: &'static str,
        solution: &'static str,
    },
    /// One illustrative prompt.
    Single(&'static str),
    None,
}

/// One collapsible panel of the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    /// Glyph shown before the title.
    pub icon: &'static str,
    pub title: &'static str,
    pub definition: &'static str,
    pub tip: Option<&'static str>,
    pub alternative: Option<&'static str>,
    pub example: SectionExample,
}

pub const PAGE_TITLE: &str = "Cómo armar un buen prompt";

pub const PAGE_SUBTITLE: &str =
    "Cuatro componentes esenciales para comunicarte efectivamente con la IA";

pub const TIP_LABEL: &str = "💡 Importante:";
pub const ALTERNATIVE_LABEL: &str = "🔄 Alternativa:";
pub const BASIC_LABEL: &str = "Versión básica:";
pub const IMPROVED_LABEL: &str = "Versión mejorada:";
pub const PROBLEM_LABEL: &str = "⚠️ Problema:";
pub const SOLUTION_LABEL: &str = "✓ Solución:";

pub const BONUS_TITLE: &str = "Bonus Track";

pub const BONUS_INTRO: &str = "Extras para llevar tus prompts al siguiente nivel:";

pub const BONUS_TIPS: [&str; 3] = [
    "Ajustá el tono de la respuesta (amigable, gracioso, seco, preciso)",
    "Pedile que responda poniéndose en un rol específico (sos una especialista en recetas veganas)",
    "Utilizá mayúsculas y símbolos como corchetes [ ] para diferenciar secciones del prompt",
];

pub const CLOSING_LABEL: &str = "Recordá:";

pub const CLOSING_MESSAGE: &str = "A medida que ganás experiencia, te volvés mejor detectando qué información es clave. No necesitás tener un prompt perfecto desde el inicio—podés ir ajustando a lo largo de la conversación.";

pub const SECTIONS: [Section; 4] = [
    Section {
        id: SectionId::Instruccion,
        icon: "🎯",
        title: "Instrucción",
        definition: "Lo que querés que el modelo haga. Podés desarmarlo en pasos para mayor precisión.",
        tip: None,
        alternative: None,
        example: SectionExample::BasicVsImproved {
            basic: "Dame una receta para cocinar buñuelos",
            improved: "Quiero una receta para cocinar buñuelos. Para eso: 1) Buscá en internet las recetas más utilizadas, 2) Hacé una síntesis de los pasos que se repiten, 3) Agregá tips que hayas encontrado para que pueda elegir cuáles utilizar.",
        },
    },
    Section {
        id: SectionId::Contexto,
        icon: "📖",
        title: "Contexto",
        definition: "Información clave que ayuda al modelo a entender mejor tu pedido. Anticipá qué datos pueden ser útiles, aunque te parezcan obvios.",
        tip: Some(
            "¿Qué puede fallar si no doy contexto? El modelo puede asumir información incorrecta basándose en lo más común.",
        ),
        alternative: None,
        example: SectionExample::ProblemSolution {
            problem: "En muchos países de LATAM los buñuelos son dulces.",
            solution: "Aclará: \"Los buñuelos que quiero cocinar son de acelga\" o \"No como lácteos\" o \"Solo quiero usar ingredientes que tengo en casa\".",
        },
    },
    Section {
        id: SectionId::Datos,
        icon: "📎",
        title: "Datos adjuntos",
        definition: "Archivos o ejemplos que agregás para dar más información: una imagen de referencia, una planilla de Excel, un documento.",
        tip: Some(
            "No todos los modelos aceptan los mismos formatos. Verificá qué puede procesar el modelo que estás usando.",
        ),
        alternative: Some(
            "Si el modelo no acepta tu archivo, intentá: pegarlo directamente en el prompt o describirlo detalladamente.",
        ),
        example: SectionExample::None,
    },
    Section {
        id: SectionId::Output,
        icon: "✨",
        title: "Indicador de output",
        definition: "Cómo querés recibir la respuesta: ¿en forma de lista? ¿en un PDF? ¿con un paso a paso ilustrado con emojis?",
        tip: None,
        alternative: None,
        example: SectionExample::Single(
            "Quiero que la receta imite el formato de esta que te dejo de ejemplo: [enlace]",
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_id_once_in_order() {
        let ids: Vec<SectionId> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
        for id in SectionId::ALL {
            assert_eq!(id.section().id, id);
        }
    }

    #[test]
    fn every_section_has_its_own_icon() {
        for (i, a) in SECTIONS.iter().enumerate() {
            assert!(!a.icon.is_empty());
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.icon, b.icon);
            }
        }
    }

    #[test]
    fn closing_message_keeps_authored_wording() {
        assert!(CLOSING_MESSAGE.contains("desde el inicio—podés ir ajustando"));
        assert!(CLOSING_MESSAGE.ends_with("a lo largo de la conversación."));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Instruccion".parse::<SectionId>().unwrap(), SectionId::Instruccion);
        assert_eq!(" OUTPUT ".parse::<SectionId>().unwrap(), SectionId::Output);
    }

    #[test]
    fn parse_unknown_id_fails() {
        let err = "bonus".parse::<SectionId>().unwrap_err();
        assert_eq!(err, GuideError::InvalidSectionId("bonus".to_string()));
    }

    #[test]
    fn from_position_is_one_based() {
        assert_eq!(SectionId::from_position(1).unwrap(), SectionId::Instruccion);
        assert_eq!(SectionId::from_position(4).unwrap(), SectionId::Output);
        assert!(SectionId::from_position(0).is_err());
        assert!(SectionId::from_position(5).is_err());
    }

    #[test]
    fn display_round_trips() {
        for id in SectionId::ALL {
            assert_eq!(id.to_string().parse::<SectionId>().unwrap(), id);
        }
    }
}
