//! # Módulo Inference — Motor de Inferência Diagnóstica
//!
//! Este módulo contém o **motor de inferência** do conselheiro,
//! responsável por derivar **condições plausíveis** a partir dos
//! sintomas observados, usando as regras da [KnowledgeBase].
//!
//! ## Analogia: O Médico Lendo o Manual
//!
//! Se a base de conhecimento é o manual do consultório, o motor é o
//! **médico** que o folheia diante do paciente — ora exigindo o quadro
//! completo de cada página (fecho), ora aceitando quadros parciais e
//! anotando o quanto cada página casa (ranqueamento).
//!
//! ## Políticas Implementadas
//!
//! | Política | Pergunta | Saída |
//! |----------|----------|-------|
//! | **Fecho** | "que fatos novos seguem dos sintomas?" | Conjunto de rótulos novos |
//! | **Ranqueada** | "quais condições são prováveis?" | Lista ordenada de [Diagnosis] |
//!
//! ## Exemplo
//!
//! ```text
//! Base contém: {joint_pain, morning_stiffness, swelling} → rheumatoid_arthritis
//! Observados: {joint_pain, morning_stiffness}
//! Fecho: {} (subconjunto incompleto)
//! Ranqueada: [Rheumatoid arthritis ⟨0.60⟩ (2/3 sintomas)]   (com confiança 0.9)
//! ```
//!
//! Veja [`InferenceEngine`] para detalhes.

/// Sub-módulo com as duas políticas de inferência e o tipo [Diagnosis].
pub mod engine;

/// Re-exports para acesso via `crate::inference::InferenceEngine`.
pub use engine::{
    Diagnosis, InferenceEngine, InferenceOutcome, InferencePolicy, MIN_CONFIDENCE,
};
