//! # Persistência — Asset de Conhecimento em Disco
//!
//! Módulo responsável por serializar/desserializar o [`KnowledgeAsset`]
//! como JSON em `data/knowledge.json`.
//!
//! ## Por Que um Asset Único
//!
//! Regras, catálogo de medicamentos, categorias de sintomas e modelo de
//! risco andam juntos: variantes do sistema que duplicavam regras no
//! código divergiram entre si, então aqui tudo vira **um** arquivo de
//! dados externo, editável sem recompilar. O núcleo aceita qualquer
//! asset na construção — nada de base embutida por implantação.
//!
//! ## Formato de Armazenamento
//!
//! JSON "pretty-printed" para facilitar inspeção e edição manual. Os
//! mapas usam `BTreeMap`, então o arquivo exportado sai em ordem
//! estável (diffs limpos entre exportações).
//!
//! ## Validação no Load
//!
//! O asset cru ainda não é uma base utilizável: as regras só são
//! validadas quando o chamador constrói a
//! [`KnowledgeBase`](crate::core::KnowledgeBase) a partir delas. Um
//! arquivo editado à mão com regra malformada falha na partida do
//! programa, nunca no meio de uma consulta.
//!
//! ## ⚠️ Atomicidade
//!
//! A escrita **não é atômica** — crash durante escrita pode corromper
//! o arquivo. Aceitável para uma ferramenta local; produção usaria
//! write-rename.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{ConditionLabel, MedicationInfo, Rule, SymptomToken};
use crate::risk::RiskModel;

/// Caminho do arquivo de persistência do asset (relativo à raiz do projeto).
const ASSET_PATH: &str = "data/knowledge.json";

/// Categoria de sintomas para apresentação agrupada na interface.
///
/// Só organiza a exibição (`--list-symptoms`) — o motor de inferência
/// ignora categorias por completo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymptomCategory {
    /// Nome da categoria (ex: "Articulares").
    pub name: String,
    /// Tokens exibidos sob a categoria, na ordem declarada.
    pub symptoms: Vec<SymptomToken>,
}

/// Asset de conhecimento completo — tudo que o conselheiro carrega do disco.
///
/// Estrutura serializável plana: o chamador constrói os contêineres de
/// domínio (base validada, catálogo) a partir dela na partida.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeAsset {
    /// Regras de condição, na ordem de declaração (ordem de desempate).
    pub rules: Vec<Rule>,

    /// Catálogo condição → medicamentos.
    pub medications: BTreeMap<ConditionLabel, Vec<MedicationInfo>>,

    /// Categorias de sintomas para a interface, na ordem de exibição.
    #[serde(default)]
    pub categories: Vec<SymptomCategory>,

    /// Modelo de risco (pesos, fator de dor, cortes).
    pub risk: RiskModel,
}

/// Salva o asset em disco como JSON pretty-printed.
///
/// Cria o diretório `data/` se não existir.
///
/// # Erros
///
/// Retorna erro se não conseguir criar o diretório, serializar,
/// ou escrever no arquivo.
pub fn save_asset(asset: &KnowledgeAsset) -> Result<()> {
    let path = Path::new(ASSET_PATH);
    // Garante que o diretório data/ existe
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Falha ao criar diretório data/")?;
    }
    let json =
        serde_json::to_string_pretty(asset).context("Falha ao serializar o asset de conhecimento")?;
    std::fs::write(path, json).context("Falha ao escrever data/knowledge.json")?;
    tracing::info!(path = ASSET_PATH, "asset de conhecimento salvo");
    Ok(())
}

/// Carrega o asset do disco, ou devolve o asset semeado se não existir.
///
/// A semente embutida ([`crate::seed::default_asset`]) cobre o domínio
/// de artrite de referência — primeira execução funciona sem arquivo
/// algum; `--export-knowledge` materializa a semente para edição.
///
/// # Erros
///
/// Retorna erro se o arquivo existir mas estiver corrompido
/// ou incompatível com o schema atual.
pub fn load_asset() -> Result<KnowledgeAsset> {
    let path = Path::new(ASSET_PATH);
    if !path.exists() {
        tracing::info!("Nenhum {} encontrado, usando a base semeada", ASSET_PATH);
        return Ok(crate::seed::default_asset());
    }
    let json = std::fs::read_to_string(path).context("Falha ao ler data/knowledge.json")?;
    let asset: KnowledgeAsset =
        serde_json::from_str(&json).context("Falha ao desserializar data/knowledge.json")?;
    tracing::info!(
        rules = asset.rules.len(),
        conditions = asset.medications.len(),
        "asset de conhecimento carregado do disco"
    );
    Ok(asset)
}
