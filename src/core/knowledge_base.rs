//! # KnowledgeBase — Contêiner Central de Regras
//!
//! A [`KnowledgeBase`] é o **coração** do conselheiro diagnóstico — o
//! contêiner que armazena as regras de condição em memória, já validadas,
//! na ordem exata em que foram declaradas.
//!
//! ## Analogia: O Manual do Consultório
//!
//! Se cada [`Rule`] é uma página de receita ("estes sintomas → esta
//! condição"), a KnowledgeBase é o **manual encadernado**: as páginas têm
//! ordem fixa, ninguém rasga nem rabisca páginas depois de impresso, e o
//! controle de qualidade acontece na gráfica (construção), não durante a
//! consulta.
//!
//! ## Armazenamento
//!
//! - **Regras**: `Vec<Rule>` — iteração na ordem de declaração, que é a
//!   ordem de desempate da política ranqueada
//!
//! Não há índices auxiliares: as bases esperadas têm dezenas de regras e
//! a varredura linear é mais simples e rápida que qualquer estrutura extra.
//!
//! ## Persistência
//!
//! A base é reconstruída a partir do [`KnowledgeAsset`](crate::persistence::KnowledgeAsset)
//! carregado de `data/knowledge.json` — a validação roda de novo a cada
//! load, então um arquivo editado à mão com regra malformada falha na
//! partida, nunca no meio de uma consulta.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{KnowledgeBase, Rule};
//!
//! let kb = KnowledgeBase::new(vec![
//!     Rule::new(["joint_pain", "morning_stiffness", "swelling"], "rheumatoid_arthritis", 0.9),
//!     Rule::new(["joint_pain", "redness", "fever", "chills"], "infectious_arthritis", 0.85),
//! ])?;
//!
//! assert_eq!(kb.rule_count(), 2);
//! assert!(kb.symptom_vocabulary().contains("fever"));
//! ```

use std::collections::BTreeSet;

use super::rule::{CareAdvice, MalformedRuleError, Rule};

/// Base de conhecimento in-memory — contêiner validado de [Rule]s.
///
/// Toda leitura de regras pelo motor de inferência passa por esta struct.
/// A construção é o **único** ponto de validação do sistema: uma
/// `KnowledgeBase` viva contém apenas regras bem-formadas, e o motor
/// pode confiar nisso sem rechecar nada.
///
/// ## Ordem de Declaração
///
/// O `Vec` interno preserva a ordem em que as regras foram declaradas.
/// Essa ordem é observável: a política ranqueada desempata pontuações
/// iguais pela posição da regra, então reordenar o arquivo de dados
/// muda a saída de forma legítima.
#[derive(Debug)]
pub struct KnowledgeBase {
    /// Regras validadas, na ordem de declaração.
    rules: Vec<Rule>,
}

impl KnowledgeBase {
    /// Constrói a base validando cada regra — falha rápido na primeira malformada.
    ///
    /// Emite log de nível `debug` com o total de regras aceitas.
    ///
    /// # Parâmetros
    ///
    /// - `rules` — regras na ordem de declaração desejada
    ///
    /// # Erros
    ///
    /// [`MalformedRuleError`] nomeando a posição e a conclusão da primeira
    /// regra inválida (antecedentes vazios, conclusão em branco ou
    /// confiança fora de (0, 1]).
    pub fn new(rules: Vec<Rule>) -> Result<Self, MalformedRuleError> {
        for (position, rule) in rules.iter().enumerate() {
            rule.validate(position)?;
        }
        tracing::debug!(total = rules.len(), "KB: base construída e validada");
        Ok(Self { rules })
    }

    /// Retorna as regras na ordem de declaração.
    ///
    /// É a visão que o [`InferenceEngine`](crate::inference::InferenceEngine)
    /// percorre — fatia imutável, sem cópia.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Retorna o número total de regras na base.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Retorna o vocabulário de sintomas: a união dos antecedentes de todas as regras.
    ///
    /// Tokens fora deste conjunto são entrada legal, mas nunca contribuem
    /// para casamento algum — a interface usa o vocabulário para avisar o
    /// usuário sobre tokens provavelmente digitados errado.
    pub fn symptom_vocabulary(&self) -> BTreeSet<&str> {
        self.rules
            .iter()
            .flat_map(|r| r.antecedents.iter().map(String::as_str))
            .collect()
    }

    /// Retorna os rótulos de condição distintos que a base sabe concluir.
    pub fn known_conditions(&self) -> BTreeSet<&str> {
        self.rules.iter().map(|r| r.conclusion.as_str()).collect()
    }

    /// Busca as orientações acessórias associadas a uma condição.
    ///
    /// Varre as regras em ordem de declaração e devolve o primeiro
    /// [`CareAdvice`] anexado a uma regra que conclui `condition`.
    ///
    /// # Retorno
    ///
    /// - `Some(advice)` — primeira regra da condição com orientações
    /// - `None` — condição desconhecida ou sem orientações anexadas
    pub fn advice_for(&self, condition: &str) -> Option<&CareAdvice> {
        self.rules
            .iter()
            .filter(|r| r.conclusion == condition)
            .find_map(|r| r.advice.as_ref())
    }
}

/// Lista rótulos de condição em forma legível para o paciente.
///
/// Converte o token interno (`"rheumatoid_arthritis"`) para texto de
/// apresentação (`"Rheumatoid arthritis"`): underscores viram espaços e
/// apenas a primeira letra é maiúscula.
///
/// # Exemplo de Saída
///
/// ```text
/// humanize_label("ankylosing_spondylitis") == "Ankylosing spondylitis"
/// ```
pub fn humanize_label(label: &str) -> String {
    let spaced = label.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rule::CareAdvice;

    fn sample_rules() -> Vec<Rule> {
        vec![
            Rule::new(
                ["joint_pain", "morning_stiffness", "swelling"],
                "rheumatoid_arthritis",
                0.9,
            )
            .with_advice(CareAdvice {
                exercise: Some("alongamento leve diário".to_string()),
                diet: None,
            }),
            Rule::new(
                ["joint_pain", "redness", "fever", "chills"],
                "infectious_arthritis",
                0.85,
            ),
        ]
    }

    /// Base com regras bem-formadas constrói sem erro e preserva a ordem.
    #[test]
    fn test_construction_preserves_declaration_order() {
        let kb = KnowledgeBase::new(sample_rules()).unwrap();
        assert_eq!(kb.rule_count(), 2);
        assert_eq!(kb.rules()[0].conclusion, "rheumatoid_arthritis");
        assert_eq!(kb.rules()[1].conclusion, "infectious_arthritis");
    }

    /// A primeira regra malformada interrompe a construção com sua posição.
    #[test]
    fn test_fail_fast_reports_position() {
        let mut rules = sample_rules();
        rules.push(Rule::new(Vec::<String>::new(), "gout", 0.7));
        let err = KnowledgeBase::new(rules).unwrap_err();
        assert_eq!(
            err,
            MalformedRuleError::EmptyAntecedents {
                position: 2,
                conclusion: "gout".to_string(),
            }
        );
    }

    /// A base tem representação de depuração que expõe suas regras.
    #[test]
    fn test_debug_format_lists_rules() {
        let kb = KnowledgeBase::new(sample_rules()).unwrap();
        let dump = format!("{kb:?}");
        assert!(dump.contains("KnowledgeBase"));
        assert!(dump.contains("rheumatoid_arthritis"));
    }

    /// O vocabulário é a união exata dos antecedentes.
    #[test]
    fn test_symptom_vocabulary_union() {
        let kb = KnowledgeBase::new(sample_rules()).unwrap();
        let vocab = kb.symptom_vocabulary();
        assert_eq!(vocab.len(), 6);
        assert!(vocab.contains("joint_pain"));
        assert!(vocab.contains("chills"));
        assert!(!vocab.contains("rheumatoid_arthritis"));
    }

    /// Condições conhecidas são as conclusões distintas.
    #[test]
    fn test_known_conditions() {
        let kb = KnowledgeBase::new(sample_rules()).unwrap();
        let conditions = kb.known_conditions();
        assert_eq!(conditions.len(), 2);
        assert!(conditions.contains("infectious_arthritis"));
    }

    /// advice_for devolve as orientações da primeira regra da condição.
    #[test]
    fn test_advice_lookup() {
        let kb = KnowledgeBase::new(sample_rules()).unwrap();
        let advice = kb.advice_for("rheumatoid_arthritis").unwrap();
        assert_eq!(advice.exercise.as_deref(), Some("alongamento leve diário"));
        assert!(kb.advice_for("infectious_arthritis").is_none());
        assert!(kb.advice_for("unknown_condition").is_none());
    }

    /// Rótulos internos viram texto de apresentação.
    #[test]
    fn test_humanize_label() {
        assert_eq!(
            humanize_label("rheumatoid_arthritis"),
            "Rheumatoid arthritis"
        );
        assert_eq!(humanize_label(""), "");
    }
}
