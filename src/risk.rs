//! # Risk — Escore Linear de Risco
//!
//! Camada auxiliar sobre a inferência: um **escore linear** que combina
//! pesos de sintomas, faixa etária e intensidade de dor em um número
//! único, depois classificado em Baixo / Médio / Alto.
//!
//! ## Fórmula
//!
//! ```text
//! score = Σ peso(sintoma) + peso(faixa etária) + fator_dor × dor
//! ```
//!
//! | Faixa do score | Nível |
//! |----------------|-------|
//! | ≤ low_max (padrão 10) | Baixo |
//! | ≤ medium_max (padrão 15) | Médio |
//! | > medium_max | Alto |
//!
//! Os cortes são dados do modelo, não constantes do código — vêm do
//! asset de conhecimento junto com os pesos, então cada implantação
//! pode calibrá-los sem recompilar.
//!
//! ## Independência
//!
//! O escore é uma função pura, independente das duas políticas de
//! inferência: não lê a [KnowledgeBase](crate::core::KnowledgeBase) nem
//! o catálogo, apenas o próprio [`RiskModel`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::SymptomToken;

/// Faixa etária do paciente, em três grupos largos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    /// Até 12 anos.
    Child,
    /// 13 a 59 anos.
    Adult,
    /// 60 anos ou mais.
    Senior,
}

/// Erro de parsing de faixa etária vinda da linha de comando.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("faixa etária desconhecida: {0:?} (esperado: child, adult ou senior)")]
pub struct UnknownAgeGroup(pub String);

impl std::str::FromStr for AgeGroup {
    type Err = UnknownAgeGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "child" => Ok(AgeGroup::Child),
            "adult" => Ok(AgeGroup::Adult),
            "senior" => Ok(AgeGroup::Senior),
            other => Err(UnknownAgeGroup(other.to_string())),
        }
    }
}

impl AgeGroup {
    /// Rótulo legível em PT-BR para a interface.
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Child => "criança",
            AgeGroup::Adult => "adulto",
            AgeGroup::Senior => "idoso",
        }
    }
}

/// Peso de cada faixa etária na fórmula do escore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgeWeights {
    /// Contribuição para pacientes [AgeGroup::Child].
    pub child: f64,
    /// Contribuição para pacientes [AgeGroup::Adult].
    pub adult: f64,
    /// Contribuição para pacientes [AgeGroup::Senior].
    pub senior: f64,
}

impl AgeWeights {
    /// Peso da faixa etária informada.
    pub fn weight_for(&self, group: AgeGroup) -> f64 {
        match group {
            AgeGroup::Child => self.child,
            AgeGroup::Adult => self.adult,
            AgeGroup::Senior => self.senior,
        }
    }
}

/// Cortes de classificação do escore em níveis.
///
/// Os padrões (10 / 15) não têm derivação clínica declarada — por isso
/// são dados configuráveis do modelo, não constantes do código.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskCutoffs {
    /// Escore máximo (inclusivo) do nível Baixo.
    pub low_max: f64,
    /// Escore máximo (inclusivo) do nível Médio.
    pub medium_max: f64,
}

impl Default for RiskCutoffs {
    fn default() -> Self {
        Self {
            low_max: 10.0,
            medium_max: 15.0,
        }
    }
}

/// Multiplicador padrão da intensidade de dor na fórmula.
fn default_pain_factor() -> f64 {
    0.5
}

/// Nível de risco classificado.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    /// Escore dentro do corte baixo.
    Low,
    /// Escore entre os dois cortes.
    Medium,
    /// Escore acima do corte médio.
    High,
}

impl RiskLevel {
    /// Rótulo legível em PT-BR para a interface.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Baixo",
            RiskLevel::Medium => "Médio",
            RiskLevel::High => "Alto",
        }
    }
}

/// Resultado da avaliação de risco — valor bruto mais nível classificado.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskScore {
    /// Soma linear da fórmula, sem arredondamento.
    pub value: f64,
    /// Classificação do valor pelos cortes do modelo.
    pub level: RiskLevel,
}

/// Modelo de risco — pesos, fator de dor e cortes, tudo dado de asset.
///
/// Sintomas fora do mapa de pesos contribuem **zero** para o escore, na
/// mesma linha do espaço aberto de tokens do motor de inferência:
/// token desconhecido é entrada legal, não erro.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskModel {
    /// Peso de cada sintoma conhecido na soma.
    pub symptom_weights: BTreeMap<SymptomToken, f64>,

    /// Pesos por faixa etária.
    pub age_weights: AgeWeights,

    /// Multiplicador da intensidade de dor (padrão 0.5).
    #[serde(default = "default_pain_factor")]
    pub pain_factor: f64,

    /// Cortes de classificação (padrão 10 / 15).
    #[serde(default)]
    pub cutoffs: RiskCutoffs,
}

impl RiskModel {
    /// Avalia o risco de um quadro clínico.
    ///
    /// Função pura — soma os pesos dos sintomas presentes no mapa, o
    /// peso da faixa etária e `pain_factor × pain`, e classifica pelo
    /// [`RiskCutoffs`] do modelo.
    ///
    /// # Parâmetros
    ///
    /// - `symptoms` — tokens observados (desconhecidos pesam zero)
    /// - `age_group` — faixa etária do paciente
    /// - `pain` — intensidade de dor relatada, esperada em 0..=10
    pub fn assess<'a>(
        &self,
        symptoms: impl IntoIterator<Item = &'a SymptomToken>,
        age_group: AgeGroup,
        pain: u8,
    ) -> RiskScore {
        let symptom_sum: f64 = symptoms
            .into_iter()
            .filter_map(|s| self.symptom_weights.get(s))
            .sum();
        let value = symptom_sum + self.age_weights.weight_for(age_group) + self.pain_factor * f64::from(pain);

        let level = if value <= self.cutoffs.low_max {
            RiskLevel::Low
        } else if value <= self.cutoffs.medium_max {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };

        RiskScore { value, level }
    }
}
