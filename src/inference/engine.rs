//! # Motor de Inferência — Fecho e Ranqueamento
//!
//! Implementação das duas políticas de casamento de sintomas sobre a
//! [KnowledgeBase]: o **fecho por encadeamento** (forward chaining até
//! ponto fixo) e o **ranqueamento ponderado** (casamento parcial com
//! limiar de confiança).
//!
//! ## Como Funciona
//!
//! ### Política A — Fecho (encadeamento exaustivo)
//!
//! O conjunto de trabalho começa com os sintomas observados. Toda regra
//! cujos antecedentes estejam **todos** no conjunto dispara, e sua
//! conclusão vira fato disponível para as próximas regras. O laço repete
//! até uma passada completa não acrescentar nada (ponto fixo).
//!
//! ```text
//! regra 1: {a, b} → c
//! regra 2: {c, d} → e
//! observados: {a, b, d}
//! ──────────────────────────────
//! passada 1: dispara regra 1 → {a, b, d, c}
//! passada 2: dispara regra 2 → {a, b, d, c, e}
//! passada 3: nada novo — ponto fixo
//! saída: {c, e}   (apenas fatos novos)
//! ```
//!
//! ### Política B — Ranqueamento (casamento parcial ponderado)
//!
//! Cada regra é avaliada **independentemente** contra o conjunto
//! observado original — sem realimentação:
//!
//! ```text
//! overlap = |antecedentes ∩ observados|
//! score   = (overlap / |antecedentes|) × confiança_da_regra
//! emite se score ≥ limiar (padrão 0.5, inclusivo)
//! ```
//!
//! ## Comparação das Políticas
//!
//! | Aspecto | Fecho | Ranqueada |
//! |---------|-------|-----------|
//! | Casamento | Subconjunto completo | Parcial ponderado |
//! | Encadeia conclusões | Sim (até ponto fixo) | Não |
//! | Usa confiança | Não | Sim |
//! | Saída | Conjunto de fatos novos | Lista ordenada de [Diagnosis] |
//! | Pergunta que responde | "aprendemos algo novo?" | "quais condições são prováveis?" |
//!
//! ## Pureza
//!
//! Ambas as políticas são funções puras de (base, sintomas): nenhum
//! estado oculto, nenhum efeito colateral, resultado repetível. Podem
//! ser chamadas concorrentemente sem sincronização.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::{humanize_label, ConditionLabel, KnowledgeBase, SymptomToken};

/// Limiar mínimo de confiança da política ranqueada.
///
/// Um casamento parcial só vira diagnóstico se
/// `(overlap / total) × confiança ≥ MIN_CONFIDENCE`. O limiar é
/// **inclusivo** (score exatamente 0.5 entra no resultado). Chamadores
/// com necessidade diferente usam
/// [`InferenceEngine::ranked_with_threshold`].
pub const MIN_CONFIDENCE: f64 = 0.5;

/// Diagnóstico produzido pela política ranqueada.
///
/// Transiente — criado a cada chamada de inferência, nunca persistido
/// pelo núcleo. Histórico de diagnósticos é responsabilidade do chamador.
///
/// ## Invariante
///
/// `confidence` ≤ confiança base da regra que o gerou, porque a razão
/// de casamento `matching_count / total_count` nunca passa de 1.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnosis {
    /// Condição concluída pela regra casada.
    pub condition: ConditionLabel,

    /// Pontuação final: razão de casamento × confiança base, em [0, 1].
    pub confidence: f64,

    /// Quantos antecedentes da regra estavam entre os observados.
    pub matching_count: usize,

    /// Total de antecedentes da regra.
    pub total_count: usize,
}

impl std::fmt::Display for Diagnosis {
    /// Formato legível: `Rheumatoid arthritis ⟨0.75⟩ (3/4 sintomas)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ⟨{:.2}⟩ ({}/{} sintomas)",
            humanize_label(&self.condition),
            self.confidence,
            self.matching_count,
            self.total_count
        )
    }
}

/// Política de inferência a aplicar em [`InferenceEngine::infer`].
///
/// As implantações reais alternam entre as duas conforme a pergunta do
/// produto: checagem "aprendemos algo novo?" (fecho) versus ranking de
/// condições prováveis (ranqueada).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InferencePolicy {
    /// Encadeamento exaustivo até ponto fixo; saída são fatos novos.
    Closure,
    /// Casamento parcial ponderado com limiar [`MIN_CONFIDENCE`].
    Ranked,
}

/// Resultado da interface unificada [`InferenceEngine::infer`].
///
/// Cada política tem forma de saída própria — conjunto de rótulos ou
/// lista ordenada — e o enum preserva ambas sem achatar uma na outra.
#[derive(Clone, Debug, PartialEq)]
pub enum InferenceOutcome {
    /// Fatos novos derivados pelo fecho (não estavam entre os observados).
    NewConditions(BTreeSet<ConditionLabel>),
    /// Diagnósticos ranqueados por confiança decrescente.
    Ranked(Vec<Diagnosis>),
}

/// Motor de inferência — struct sem estado, totalmente funcional.
///
/// O motor não armazena nada: recebe a base por referência e devolve o
/// resultado. Isso o torna trivialmente thread-safe e repetível.
///
/// ## Uso
///
/// ```rust
/// let novos = InferenceEngine::closure(&kb, &observados);
/// let ranking = InferenceEngine::ranked(&kb, &observados);
/// ```
pub struct InferenceEngine;

impl InferenceEngine {
    /// Política A — fecho por encadeamento exaustivo.
    ///
    /// ## Algoritmo (ponto fixo)
    ///
    /// ```text
    /// inferred = observados
    /// repita:
    ///   para cada regra:
    ///     se antecedentes ⊆ inferred e conclusão ∉ inferred:
    ///       inferred += conclusão
    /// até uma passada completa não adicionar nada
    /// saída = inferred \ observados
    /// ```
    ///
    /// Termina sempre: cada passada ou adiciona ≥ 1 fato novo ou para, e
    /// o universo de fatos é finito (limitado pelo número de regras).
    ///
    /// ## Retorno
    ///
    /// Apenas os rótulos **novos** — uma regra cuja conclusão duplica um
    /// sintoma já observado dispara normalmente, mas a conclusão é
    /// filtrada da saída (o motor reporta conhecimento novo, não ecoa a
    /// entrada).
    ///
    /// ## Performance
    ///
    /// O(passadas × regras × tamanho médio da regra); o número de
    /// passadas é limitado pelo número de regras. Para bases com dezenas
    /// de regras, instantâneo.
    pub fn closure(
        kb: &KnowledgeBase,
        symptoms: &BTreeSet<SymptomToken>,
    ) -> BTreeSet<ConditionLabel> {
        let mut inferred: BTreeSet<SymptomToken> = symptoms.clone();

        let mut changed = true;
        while changed {
            changed = false;
            for rule in kb.rules() {
                // conclusão já conhecida: disparar de novo não acrescenta nada
                if inferred.contains(&rule.conclusion) {
                    continue;
                }
                if rule.antecedents.iter().all(|a| inferred.contains(a)) {
                    inferred.insert(rule.conclusion.clone());
                    changed = true;
                }
            }
        }

        // Apenas fatos que NÃO estavam na entrada original
        inferred
            .into_iter()
            .filter(|fact| !symptoms.contains(fact))
            .collect()
    }

    /// Política B — ranqueamento ponderado com o limiar padrão [`MIN_CONFIDENCE`].
    pub fn ranked(kb: &KnowledgeBase, symptoms: &BTreeSet<SymptomToken>) -> Vec<Diagnosis> {
        Self::ranked_with_threshold(kb, symptoms, MIN_CONFIDENCE)
    }

    /// Política B com limiar configurável.
    ///
    /// ## Algoritmo
    ///
    /// Cada regra é avaliada isoladamente contra o conjunto observado
    /// original — conclusões **nunca** realimentam antecedentes:
    ///
    /// ```text
    /// para cada regra (na ordem de declaração):
    ///   overlap = |antecedentes ∩ observados|
    ///   se overlap == 0: pula
    ///   score = (overlap / |antecedentes|) × confiança
    ///   se score ≥ limiar: emite Diagnosis
    /// ordena por score decrescente (empate: ordem de declaração)
    /// ```
    ///
    /// ## Ordenação
    ///
    /// `sort_by` é estável, então diagnósticos com score igual preservam
    /// a ordem de declaração das regras — chamadores que exibem só o
    /// primeiro resultado dependem disso.
    pub fn ranked_with_threshold(
        kb: &KnowledgeBase,
        symptoms: &BTreeSet<SymptomToken>,
        threshold: f64,
    ) -> Vec<Diagnosis> {
        let mut matches: Vec<Diagnosis> = Vec::new();

        for rule in kb.rules() {
            let overlap = rule
                .antecedents
                .iter()
                .filter(|a| symptoms.contains(*a))
                .count();
            if overlap == 0 {
                continue;
            }

            let score = (overlap as f64 / rule.antecedents.len() as f64) * rule.confidence;
            if score >= threshold {
                matches.push(Diagnosis {
                    condition: rule.conclusion.clone(),
                    confidence: score,
                    matching_count: overlap,
                    total_count: rule.antecedents.len(),
                });
            }
        }

        // Ordena por confiança decrescente; sort estável preserva empates
        matches.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matches
    }

    /// Interface unificada — despacha para a política pedida.
    ///
    /// # Parâmetros
    ///
    /// - `policy` — [`InferencePolicy::Closure`] ou [`InferencePolicy::Ranked`]
    /// - `kb` — base de conhecimento validada
    /// - `symptoms` — tokens de sintoma observados (conjunto vazio é
    ///   entrada legal e produz resultado vazio)
    ///
    /// ## Retorno
    ///
    /// [`InferenceOutcome`] na forma da política escolhida.
    pub fn infer(
        policy: InferencePolicy,
        kb: &KnowledgeBase,
        symptoms: &BTreeSet<SymptomToken>,
    ) -> InferenceOutcome {
        match policy {
            InferencePolicy::Closure => InferenceOutcome::NewConditions(Self::closure(kb, symptoms)),
            InferencePolicy::Ranked => InferenceOutcome::Ranked(Self::ranked(kb, symptoms)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rule;

    fn symptoms(tokens: &[&str]) -> BTreeSet<SymptomToken> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn single_rule_kb() -> KnowledgeBase {
        KnowledgeBase::new(vec![Rule::new(
            ["joint_pain", "morning_stiffness"],
            "rheumatoid_arthritis",
            1.0,
        )])
        .unwrap()
    }

    // ─── fecho ──────────────────────────────────────────────────────────

    /// Casamento completo: o fecho deriva a condição.
    #[test]
    fn closure_full_match_derives_condition() {
        let kb = single_rule_kb();
        let derived = InferenceEngine::closure(&kb, &symptoms(&["joint_pain", "morning_stiffness"]));
        assert_eq!(derived, symptoms(&["rheumatoid_arthritis"]));
    }

    /// Casamento parcial não satisfaz o subconjunto: fecho vazio.
    #[test]
    fn closure_partial_match_derives_nothing() {
        let kb = single_rule_kb();
        let derived = InferenceEngine::closure(&kb, &symptoms(&["joint_pain"]));
        assert!(derived.is_empty());
    }

    /// Conjunto observado vazio produz fecho vazio (entrada legal).
    #[test]
    fn closure_empty_input_is_empty() {
        let kb = single_rule_kb();
        assert!(InferenceEngine::closure(&kb, &BTreeSet::new()).is_empty());
    }

    /// Encadeamento: a conclusão de uma regra alimenta a próxima.
    #[test]
    fn closure_chains_conclusions_to_fixed_point() {
        let kb = KnowledgeBase::new(vec![
            Rule::new(["a", "b"], "c", 1.0),
            Rule::new(["c", "d"], "e", 1.0),
        ])
        .unwrap();
        let derived = InferenceEngine::closure(&kb, &symptoms(&["a", "b", "d"]));
        assert_eq!(derived, symptoms(&["c", "e"]));
    }

    /// Encadeamento funciona mesmo com as regras declaradas fora de ordem:
    /// a segunda passada alcança o ponto fixo.
    #[test]
    fn closure_reaches_fixed_point_regardless_of_rule_order() {
        let kb = KnowledgeBase::new(vec![
            Rule::new(["c", "d"], "e", 1.0),
            Rule::new(["a", "b"], "c", 1.0),
        ])
        .unwrap();
        let derived = InferenceEngine::closure(&kb, &symptoms(&["a", "b", "d"]));
        assert_eq!(derived, symptoms(&["c", "e"]));
    }

    /// Conclusão que duplica sintoma observado é derivável mas filtrada:
    /// o motor só reporta conhecimento novo.
    #[test]
    fn closure_filters_conclusions_already_observed() {
        let kb = KnowledgeBase::new(vec![
            Rule::new(["fever"], "joint_pain", 1.0),
            Rule::new(["joint_pain", "swelling"], "arthritis", 1.0),
        ])
        .unwrap();
        let derived = InferenceEngine::closure(&kb, &symptoms(&["fever", "joint_pain", "swelling"]));
        // "joint_pain" dispara mas já era observado; só "arthritis" é novo
        assert_eq!(derived, symptoms(&["arthritis"]));
    }

    // ─── ranqueamento ───────────────────────────────────────────────────

    /// Casamento parcial exatamente no limiar (0.5) é incluído.
    #[test]
    fn ranked_partial_match_at_threshold_is_included() {
        let kb = single_rule_kb();
        let ranking = InferenceEngine::ranked(&kb, &symptoms(&["joint_pain"]));
        assert_eq!(
            ranking,
            vec![Diagnosis {
                condition: "rheumatoid_arthritis".to_string(),
                confidence: 0.5,
                matching_count: 1,
                total_count: 2,
            }]
        );
    }

    /// Score abaixo do limiar fica fora do resultado.
    #[test]
    fn ranked_below_threshold_is_excluded() {
        let kb = KnowledgeBase::new(vec![Rule::new(
            ["a", "b", "c"],
            "condition_x",
            1.0,
        )])
        .unwrap();
        // overlap 1/3 ≈ 0.33 < 0.5
        let ranking = InferenceEngine::ranked(&kb, &symptoms(&["a"]));
        assert!(ranking.is_empty());
        // propriedade: nenhum resultado abaixo do limiar, nunca
        let fuller = InferenceEngine::ranked(&kb, &symptoms(&["a", "b"]));
        assert!(fuller.iter().all(|d| d.confidence >= MIN_CONFIDENCE));
    }

    /// Conjunto observado vazio produz ranking vazio.
    #[test]
    fn ranked_empty_input_is_empty() {
        let kb = single_rule_kb();
        assert!(InferenceEngine::ranked(&kb, &BTreeSet::new()).is_empty());
    }

    /// Ordenação: score decrescente; empates preservam a ordem de declaração.
    #[test]
    fn ranked_ties_preserve_declaration_order() {
        let kb = KnowledgeBase::new(vec![
            Rule::new(["a"], "condition_a", 0.6),
            Rule::new(["a"], "condition_b", 0.6),
            Rule::new(["a"], "condition_top", 0.9),
        ])
        .unwrap();
        let ranking = InferenceEngine::ranked(&kb, &symptoms(&["a"]));
        let ordered: Vec<&str> = ranking.iter().map(|d| d.condition.as_str()).collect();
        assert_eq!(ordered, vec!["condition_top", "condition_a", "condition_b"]);
    }

    /// A política ranqueada NÃO encadeia: conclusões não viram antecedentes.
    #[test]
    fn ranked_does_not_chain() {
        let kb = KnowledgeBase::new(vec![
            Rule::new(["a", "b"], "c", 1.0),
            Rule::new(["c"], "e", 1.0),
        ])
        .unwrap();
        let ranking = InferenceEngine::ranked(&kb, &symptoms(&["a", "b"]));
        // só a primeira regra casa; "c" nunca realimenta a segunda
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].condition, "c");
    }

    /// Invariante: a confiança do casamento nunca excede a confiança base.
    #[test]
    fn ranked_confidence_never_exceeds_rule_confidence() {
        let kb = KnowledgeBase::new(vec![Rule::new(
            ["a", "b", "c", "d"],
            "condition_x",
            0.8,
        )])
        .unwrap();
        let ranking =
            InferenceEngine::ranked(&kb, &symptoms(&["a", "b", "c", "d", "extra_token"]));
        assert_eq!(ranking.len(), 1);
        assert!(ranking[0].confidence <= 0.8);
        assert_eq!(ranking[0].confidence, 0.8);
        assert_eq!(ranking[0].matching_count, 4);
        assert_eq!(ranking[0].total_count, 4);
    }

    /// Duas regras para a mesma condição geram duas entradas, cada uma
    /// pontuada pela própria regra.
    #[test]
    fn ranked_emits_one_entry_per_matching_rule() {
        let kb = KnowledgeBase::new(vec![
            Rule::new(["a"], "condition_x", 0.9),
            Rule::new(["a", "b"], "condition_x", 1.0),
        ])
        .unwrap();
        let ranking = InferenceEngine::ranked(&kb, &symptoms(&["a", "b"]));
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].confidence, 1.0);
        assert_eq!(ranking[1].confidence, 0.9);
    }

    /// Limiar configurável: com limiar menor, casamentos fracos aparecem.
    #[test]
    fn ranked_with_custom_threshold() {
        let kb = KnowledgeBase::new(vec![Rule::new(["a", "b", "c"], "condition_x", 1.0)]).unwrap();
        let strict = InferenceEngine::ranked_with_threshold(&kb, &symptoms(&["a"]), 0.5);
        assert!(strict.is_empty());
        let lenient = InferenceEngine::ranked_with_threshold(&kb, &symptoms(&["a"]), 0.3);
        assert_eq!(lenient.len(), 1);
        assert!((lenient[0].confidence - 1.0 / 3.0).abs() < 1e-9);
    }

    // ─── interface unificada ────────────────────────────────────────────

    /// O despacho unificado devolve a forma de saída da política pedida.
    #[test]
    fn infer_dispatches_by_policy() {
        let kb = single_rule_kb();
        let observed = symptoms(&["joint_pain", "morning_stiffness"]);

        let closure = InferenceEngine::infer(InferencePolicy::Closure, &kb, &observed);
        assert_eq!(
            closure,
            InferenceOutcome::NewConditions(symptoms(&["rheumatoid_arthritis"]))
        );

        let ranked = InferenceEngine::infer(InferencePolicy::Ranked, &kb, &observed);
        match ranked {
            InferenceOutcome::Ranked(list) => {
                assert_eq!(list.len(), 1);
                assert_eq!(list[0].confidence, 1.0);
            }
            other => panic!("esperava saída ranqueada, veio {:?}", other),
        }
    }

    /// Determinismo: mesma entrada, mesma saída, em ambas as políticas.
    #[test]
    fn both_policies_are_deterministic() {
        let kb = KnowledgeBase::new(vec![
            Rule::new(["joint_pain", "morning_stiffness", "swelling"], "rheumatoid_arthritis", 0.9),
            Rule::new(["joint_pain", "redness", "fever", "chills"], "infectious_arthritis", 0.85),
            Rule::new(["fever", "chills"], "flu_like_state", 0.6),
        ])
        .unwrap();
        let observed = symptoms(&["joint_pain", "fever", "chills"]);

        assert_eq!(
            InferenceEngine::closure(&kb, &observed),
            InferenceEngine::closure(&kb, &observed)
        );
        assert_eq!(
            InferenceEngine::ranked(&kb, &observed),
            InferenceEngine::ranked(&kb, &observed)
        );
    }

    /// Formato de exibição do diagnóstico.
    #[test]
    fn diagnosis_display_format() {
        let d = Diagnosis {
            condition: "rheumatoid_arthritis".to_string(),
            confidence: 0.75,
            matching_count: 3,
            total_count: 4,
        };
        assert_eq!(d.to_string(), "Rheumatoid arthritis ⟨0.75⟩ (3/4 sintomas)");
    }
}
