//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os **tipos fundamentais** do conselheiro diagnóstico.
//! Tudo no sistema gira em torno destes tipos:
//!
//! - [`Rule`] — Regra de condição ("estes sintomas → esta condição")
//! - [`CareAdvice`] — Orientações acessórias anexadas a uma regra
//! - [`MalformedRuleError`] — Erro de validação na construção da base
//! - [`KnowledgeBase`] — Contêiner validado e ordenado de regras
//! - [`MedicationCatalog`] — Mapa condição → medicamentos, somente leitura
//! - [`MedicationInfo`] / [`MedicationAdvice`] — Registro canônico e sua
//!   versão decorada para apresentação
//!
//! ## Analogia com o Mundo Real
//!
//! Pense no núcleo como um **consultório de referência**:
//! - A [`KnowledgeBase`] é o **manual de diagnóstico** — páginas fixas,
//!   revisadas antes da impressão
//! - O [`MedicationCatalog`] é a **farmácia de referência** — fichas de
//!   tratamento consultadas por condição
//! - O motor de inferência (módulo vizinho) é o **médico** que lê o manual
//!   diante dos sintomas relatados
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{KnowledgeBase, Rule};
//!
//! let kb = KnowledgeBase::new(vec![
//!     Rule::new(["joint_pain", "morning_stiffness"], "rheumatoid_arthritis", 1.0),
//! ])?;
//!
//! assert!(kb.known_conditions().contains("rheumatoid_arthritis"));
//! ```

/// Sub-módulo com a implementação de [`Rule`], [`CareAdvice`] e [`MalformedRuleError`].
pub mod rule;

/// Sub-módulo com a implementação de [`KnowledgeBase`] — contêiner central de regras.
pub mod knowledge_base;

/// Sub-módulo com a implementação de [`MedicationCatalog`] e [`MedicationInfo`].
pub mod catalog;

// Re-exports para conveniência — permite usar `crate::core::Rule` diretamente.
pub use rule::{CareAdvice, ConditionLabel, MalformedRuleError, Rule, SymptomToken};
pub use knowledge_base::{humanize_label, KnowledgeBase};
pub use catalog::{MedicationAdvice, MedicationCatalog, MedicationInfo};
