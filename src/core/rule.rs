//! # Rule — Regra de Condição Clínica
//!
//! Uma [`Rule`] é a unidade básica da base de conhecimento: mapeia um
//! **conjunto de sintomas** (antecedentes) para uma **condição** (conclusão),
//! com um grau de confiança declarado pelo autor da regra.
//!
//! ## Analogia: A Receita do Diagnóstico
//!
//! Pense em cada regra como uma **receita**: "se o paciente apresenta
//! dor articular E rigidez matinal E inchaço, então considere artrite
//! reumatoide". Os ingredientes (antecedentes) precisam estar todos
//! presentes para a receita disparar por completo; presença parcial
//! rende apenas uma sugestão ponderada (ver política ranqueada).
//!
//! ## Campos Principais
//!
//! | Campo | Tipo | Descrição |
//! |-------|------|-----------|
//! | `antecedents` | BTreeSet<[SymptomToken]> | Sintomas exigidos (não-vazio, únicos) |
//! | `conclusion` | [ConditionLabel] | Condição concluída quando a regra dispara |
//! | `confidence` | f64 | Confiança base do autor, em (0, 1] |
//! | `advice` | Option<[CareAdvice]> | Orientações acessórias (exercício, dieta) |
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::Rule;
//!
//! let regra = Rule::new(
//!     ["joint_pain", "morning_stiffness", "swelling"],
//!     "rheumatoid_arthritis",
//!     0.9,
//! );
//! assert_eq!(regra.antecedents.len(), 3);
//! ```
//!
//! ## Imutabilidade
//!
//! Regras são imutáveis depois de carregadas — a [`KnowledgeBase`]
//! (crate::core::KnowledgeBase) valida cada regra na construção e nunca
//! as altera em memória.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Alias de tipo para um token de sintoma.
///
/// Tokens são identificadores opacos (ex: `"joint_pain"`), comparados por
/// igualdade exata de string — nenhuma normalização é aplicada pelo núcleo.
/// O espaço de nomes é aberto: tokens desconhecidos são entrada legal e
/// simplesmente nunca casam com regra alguma.
pub type SymptomToken = String;

/// Alias de tipo para o rótulo de uma condição diagnosticada.
///
/// Também opaco (ex: `"rheumatoid_arthritis"`). Serve de saída da
/// inferência e de chave de busca no catálogo de medicamentos
/// ([`MedicationCatalog`](crate::core::MedicationCatalog)).
pub type ConditionLabel = String;

/// Orientações acessórias anexadas a uma regra.
///
/// Texto livre de apoio ao paciente — dicas de exercício e dieta que o
/// autor da regra associou à condição. Não participa do casamento de
/// sintomas; é apenas carga de apresentação devolvida junto ao diagnóstico.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CareAdvice {
    /// Dica de exercício/fisioterapia (ex: "alongamento leve diário").
    pub exercise: Option<String>,

    /// Dica de dieta (ex: "alimentos anti-inflamatórios").
    pub diet: Option<String>,
}

/// Erro de validação de regra — disparado na construção da base.
///
/// A base de conhecimento falha rápido: nenhuma regra malformada chega
/// viva ao motor de inferência. O `position` (índice da regra no vetor
/// declarado) aparece na mensagem para facilitar o conserto manual do
/// arquivo de dados.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MalformedRuleError {
    /// Regra sem antecedentes — nunca poderia disparar de forma válida.
    #[error("regra {position} ({conclusion:?}): conjunto de antecedentes vazio")]
    EmptyAntecedents {
        /// Índice da regra na sequência declarada.
        position: usize,
        /// Conclusão declarada (para localizar a regra no arquivo).
        conclusion: ConditionLabel,
    },

    /// Regra sem rótulo de conclusão (vazio ou somente espaços).
    #[error("regra {position}: rótulo de conclusão ausente ou em branco")]
    MissingConclusion {
        /// Índice da regra na sequência declarada.
        position: usize,
    },

    /// Confiança fora do intervalo válido (0, 1] — inclui NaN.
    #[error("regra {position} ({conclusion:?}): confiança {confidence} fora do intervalo (0, 1]")]
    ConfidenceOutOfRange {
        /// Índice da regra na sequência declarada.
        position: usize,
        /// Conclusão declarada.
        conclusion: ConditionLabel,
        /// Valor inválido encontrado.
        confidence: f64,
    },
}

/// Confiança padrão para regras que não declaram uma explicitamente.
///
/// Regra sem confiança no JSON é tratada como certeza total (1.0) —
/// sob a política de fecho isso equivale a uma regra não-ponderada.
fn default_confidence() -> f64 {
    1.0
}

/// Regra de condição — "se estes sintomas, então esta condição".
///
/// ## Semântica nas duas políticas de inferência
///
/// - **Fecho** (encadeamento exaustivo): a regra dispara quando **todos**
///   os antecedentes pertencem ao conjunto de fatos corrente; a conclusão
///   vira fato e pode alimentar outras regras.
/// - **Ranqueada** (casamento parcial ponderado): a regra pontua
///   `(|antecedentes ∩ observados| / |antecedentes|) × confidence`,
///   sem realimentação.
///
/// ## Invariantes (garantidos pela validação)
///
/// - `antecedents` nunca é vazio;
/// - `conclusion` nunca é em branco;
/// - `confidence` ∈ (0, 1].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Sintomas exigidos para a regra disparar por completo.
    ///
    /// `BTreeSet` torna a unicidade estrutural (duplicatas no JSON
    /// colapsam na desserialização) e a iteração determinística.
    pub antecedents: BTreeSet<SymptomToken>,

    /// Condição concluída quando a regra dispara.
    pub conclusion: ConditionLabel,

    /// Confiança base declarada pelo autor, em (0, 1].
    ///
    /// Combina com a razão de casamento parcial na política ranqueada.
    /// Ausente no JSON → assume 1.0 (certeza total).
    #[serde(default = "default_confidence")]
    pub confidence: f64,

    /// Orientações acessórias opcionais (exercício, dieta).
    #[serde(default)]
    pub advice: Option<CareAdvice>,
}

impl Rule {
    /// Cria uma nova regra sem orientações acessórias.
    ///
    /// Aceita qualquer coleção de tokens — duplicatas colapsam no
    /// `BTreeSet`. A validação de intervalo/vazio acontece depois, na
    /// construção da [`KnowledgeBase`](crate::core::KnowledgeBase).
    ///
    /// # Parâmetros
    ///
    /// - `antecedents` — tokens de sintoma exigidos
    /// - `conclusion` — rótulo da condição concluída
    /// - `confidence` — confiança base em (0, 1]
    pub fn new(
        antecedents: impl IntoIterator<Item = impl Into<SymptomToken>>,
        conclusion: impl Into<ConditionLabel>,
        confidence: f64,
    ) -> Self {
        Self {
            antecedents: antecedents.into_iter().map(Into::into).collect(),
            conclusion: conclusion.into(),
            confidence,
            advice: None,
        }
    }

    /// Anexa orientações acessórias à regra (estilo builder).
    pub fn with_advice(mut self, advice: CareAdvice) -> Self {
        self.advice = Some(advice);
        self
    }

    /// Valida a regra contra as três classes de malformação.
    ///
    /// Chamada pela [`KnowledgeBase`](crate::core::KnowledgeBase) na
    /// construção — nunca por chamada de inferência.
    ///
    /// # Parâmetros
    ///
    /// - `position` — índice da regra na sequência declarada (só para a
    ///   mensagem de erro)
    ///
    /// # Erros
    ///
    /// - [`MalformedRuleError::MissingConclusion`] — conclusão em branco
    /// - [`MalformedRuleError::EmptyAntecedents`] — sem antecedentes
    /// - [`MalformedRuleError::ConfidenceOutOfRange`] — confiança ∉ (0, 1]
    ///   (comparações com NaN falham, portanto NaN também é rejeitado)
    pub fn validate(&self, position: usize) -> Result<(), MalformedRuleError> {
        if self.conclusion.trim().is_empty() {
            return Err(MalformedRuleError::MissingConclusion { position });
        }
        if self.antecedents.is_empty() {
            return Err(MalformedRuleError::EmptyAntecedents {
                position,
                conclusion: self.conclusion.clone(),
            });
        }
        // NaN não satisfaz `> 0.0`, então cai aqui junto com os demais inválidos
        if !(self.confidence > 0.0 && self.confidence <= 1.0) {
            return Err(MalformedRuleError::ConfidenceOutOfRange {
                position,
                conclusion: self.conclusion.clone(),
                confidence: self.confidence,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Regra bem-formada passa na validação.
    #[test]
    fn test_valid_rule() {
        let rule = Rule::new(["joint_pain", "swelling"], "rheumatoid_arthritis", 0.9);
        assert!(rule.validate(0).is_ok());
    }

    /// Antecedentes vazios são rejeitados com a variante certa.
    #[test]
    fn test_empty_antecedents_rejected() {
        let rule = Rule::new(Vec::<String>::new(), "rheumatoid_arthritis", 0.9);
        assert_eq!(
            rule.validate(3),
            Err(MalformedRuleError::EmptyAntecedents {
                position: 3,
                conclusion: "rheumatoid_arthritis".to_string(),
            })
        );
    }

    /// Conclusão em branco (inclusive só espaços) é rejeitada.
    #[test]
    fn test_blank_conclusion_rejected() {
        let rule = Rule::new(["joint_pain"], "   ", 0.9);
        assert_eq!(
            rule.validate(1),
            Err(MalformedRuleError::MissingConclusion { position: 1 })
        );
    }

    /// Confiança deve ficar em (0, 1]: zero e acima de 1 são rejeitados,
    /// exatamente 1.0 é aceito.
    #[test]
    fn test_confidence_range() {
        let zero = Rule::new(["a"], "c", 0.0);
        assert!(matches!(
            zero.validate(0),
            Err(MalformedRuleError::ConfidenceOutOfRange { .. })
        ));

        let above = Rule::new(["a"], "c", 1.5);
        assert!(matches!(
            above.validate(0),
            Err(MalformedRuleError::ConfidenceOutOfRange { .. })
        ));

        let exact_one = Rule::new(["a"], "c", 1.0);
        assert!(exact_one.validate(0).is_ok());
    }

    /// NaN nunca passa pela validação de intervalo.
    #[test]
    fn test_nan_confidence_rejected() {
        let rule = Rule::new(["a"], "c", f64::NAN);
        assert!(matches!(
            rule.validate(0),
            Err(MalformedRuleError::ConfidenceOutOfRange { .. })
        ));
    }

    /// Tokens duplicados colapsam no BTreeSet — unicidade é estrutural.
    #[test]
    fn test_duplicate_antecedents_collapse() {
        let rule = Rule::new(["joint_pain", "joint_pain", "fever"], "x", 1.0);
        assert_eq!(rule.antecedents.len(), 2);
    }

    /// Confiança ausente no JSON assume o padrão 1.0.
    #[test]
    fn test_default_confidence_from_json() {
        let rule: Rule = serde_json::from_str(
            r#"{ "antecedents": ["joint_pain"], "conclusion": "gout" }"#,
        )
        .unwrap();
        assert_eq!(rule.confidence, 1.0);
        assert!(rule.advice.is_none());
    }
}
