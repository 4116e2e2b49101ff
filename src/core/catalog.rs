//! # MedicationCatalog — Catálogo de Medicamentos
//!
//! O [`MedicationCatalog`] mapeia cada condição diagnosticada para a
//! sequência de medicamentos associada. É um dado de referência puro:
//! carregado uma vez, nunca mutado, consultado por rótulo de condição.
//!
//! ## Analogia: A Farmácia de Referência
//!
//! Pense no catálogo como o **balcão de referência de uma farmácia**:
//! você chega com o nome da condição e recebe a lista de medicamentos
//! indicados, na ordem em que o farmacêutico os recomendaria. Se a
//! condição não consta no fichário, a resposta é uma lista vazia — não
//! um alarme: condições novas entram na base de regras antes de
//! ganharem ficha na farmácia.
//!
//! ## Decoração com Aviso
//!
//! A interface anexa um aviso constante ("procure um médico antes de
//! usar") a cada medicamento exibido. Isso acontece via
//! [`MedicationInfo::with_warning`], que devolve um **novo**
//! [`MedicationAdvice`] — o registro canônico do catálogo jamais é
//! alterado, então o catálogo pode ser compartilhado entre chamadores
//! concorrentes sem sincronização.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::rule::ConditionLabel;

/// Registro canônico de um medicamento no catálogo.
///
/// Imutável após o load — consultas apenas leem; a decoração com aviso
/// produz um valor novo em vez de tocar neste registro.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedicationInfo {
    /// Nome comercial ou classe (ex: "Methotrexate", "NSAIDs").
    pub name: String,

    /// Descrição curta do papel do medicamento no tratamento.
    pub description: String,

    /// Orientação de uso em linguagem de paciente.
    pub usage: String,
}

/// Registro de medicamento **decorado** para apresentação.
///
/// Cópia de um [`MedicationInfo`] acrescida do aviso efêmero da camada
/// de apresentação. Nunca entra no catálogo nem é persistido.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MedicationAdvice {
    /// Nome do medicamento (copiado do registro canônico).
    pub name: String,

    /// Descrição (copiada do registro canônico).
    pub description: String,

    /// Orientação de uso (copiada do registro canônico).
    pub usage: String,

    /// Aviso anexado pela camada de apresentação.
    pub warning: String,
}

impl MedicationInfo {
    /// Decora o registro com um aviso, devolvendo um [`MedicationAdvice`] novo.
    ///
    /// Transformação pura: `self` permanece intacto, o catálogo continua
    /// seguro para compartilhamento.
    ///
    /// # Exemplo
    ///
    /// ```rust
    /// let advice = info.with_warning("Consulte um médico antes de usar.");
    /// assert_eq!(advice.name, info.name);
    /// ```
    pub fn with_warning(&self, warning: impl Into<String>) -> MedicationAdvice {
        MedicationAdvice {
            name: self.name.clone(),
            description: self.description.clone(),
            usage: self.usage.clone(),
            warning: warning.into(),
        }
    }
}

/// Catálogo condição → medicamentos, somente leitura.
///
/// `BTreeMap` mantém as condições em ordem alfabética estável, o que
/// deixa o JSON exportado determinístico e fácil de revisar à mão.
pub struct MedicationCatalog {
    /// Condição → sequência ordenada de medicamentos.
    entries: BTreeMap<ConditionLabel, Vec<MedicationInfo>>,
}

impl MedicationCatalog {
    /// Cria o catálogo a partir do mapa carregado do asset de conhecimento.
    ///
    /// Emite log de nível `debug` com o número de condições catalogadas.
    pub fn new(entries: BTreeMap<ConditionLabel, Vec<MedicationInfo>>) -> Self {
        tracing::debug!(conditions = entries.len(), "catálogo de medicamentos carregado");
        Self { entries }
    }

    /// Consulta os medicamentos de uma condição — **total**, nunca falha.
    ///
    /// # Retorno
    ///
    /// - fatia na ordem do catálogo, para condição conhecida
    /// - fatia vazia, para condição desconhecida (ausência de dado é
    ///   resultado normal, não erro)
    pub fn lookup(&self, condition: &str) -> &[MedicationInfo] {
        self.entries
            .get(condition)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Retorna o número de condições com ficha no catálogo.
    pub fn condition_count(&self) -> usize {
        self.entries.len()
    }
}
