#![allow(dead_code, unused_imports)]
#![allow(rustdoc::broken_intra_doc_links, rustdoc::invalid_html_tags)]
//! # Conselheiro Diagnóstico — Diagnostic Advisor
//!
//! **Ponto de entrada principal** do conselheiro diagnóstico por regras.
//!
//! Este arquivo inicializa os componentes do sistema e executa uma
//! consulta completa: os sintomas entram pela linha de comando, passam
//! pelas duas políticas de inferência e pelo escore de risco, e o
//! relatório sai em texto no terminal.
//!
//! ## Fluxo de Execução
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Faz parsing dos argumentos (sintomas, faixa etária, dor)
//!   ├── Carrega o asset de conhecimento (data/knowledge.json ou semente)
//!   ├── Constrói KnowledgeBase (validação fail-fast) e MedicationCatalog
//!   ├── Roda o fecho (fatos novos) e o ranqueamento (condições prováveis)
//!   ├── Avalia o escore de risco do quadro
//!   └── Imprime o relatório da consulta
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Consulta com logs padrão (info)
//! cargo run -- joint_pain morning_stiffness swelling --age senior --pain 6
//!
//! # Consulta com logs detalhados
//! RUST_LOG=debug cargo run -- joint_pain fever chills
//!
//! # Utilitários
//! cargo run -- --list-symptoms
//! cargo run -- --export-knowledge
//! ```
//!
//! ## Caso de Uso
//!
//! O sistema recebe um conjunto de sintomas observados e:
//! - Deriva condições por encadeamento exaustivo de regras (fecho)
//! - Ranqueia condições por casamento parcial ponderado
//! - Lista medicamentos do catálogo, com aviso de consulta médica
//! - Classifica o risco do quadro em Baixo / Médio / Alto

// Declaração dos módulos da aplicação.
// Cada módulo corresponde a uma camada da arquitetura:

/// Módulo `cli` — argumentos de linha de comando (clap).
mod cli;

/// Módulo `core` — tipos fundamentais: Rule, KnowledgeBase, MedicationCatalog.
mod core;

/// Módulo `inference` — motor de inferência (fecho e ranqueamento).
mod inference;

/// Módulo `persistence` — serialização/desserialização do asset em JSON.
mod persistence;

/// Módulo `risk` — escore linear de risco (pesos, faixa etária, dor).
mod risk;

/// Módulo `seed` — base de referência embutida (domínio de artrite).
mod seed;

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::core::{
    humanize_label, KnowledgeBase, MedicationAdvice, MedicationCatalog, MedicationInfo,
    SymptomToken,
};
use crate::inference::InferenceEngine;
use crate::persistence::KnowledgeAsset;

/// Aviso anexado a todo medicamento exibido.
///
/// O catálogo não embute texto de aconselhamento — o aviso é decoração
/// da camada de apresentação, aplicada via
/// [`MedicationInfo::with_warning`](crate::core::MedicationInfo::with_warning).
const MEDICATION_WARNING: &str = "Consulte um médico antes de iniciar qualquer medicamento.";

/// Função principal do conselheiro diagnóstico.
///
/// Executa uma consulta única, do parsing dos argumentos ao relatório
/// impresso. Sem servidor, sem estado entre execuções: todo histórico
/// de consultas é responsabilidade de quem chama.
///
/// # Erros
///
/// Retorna erro se:
/// - O asset em disco existir mas estiver corrompido
/// - Alguma regra do asset for malformada (validação fail-fast)
/// - A exportação não conseguir escrever em `data/`
fn main() -> Result<()> {
    // Configura o sistema de logging/tracing.
    // Aceita a variável de ambiente RUST_LOG para configurar o nível.
    // Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🩺 Conselheiro Diagnóstico — Starting...");

    let args = cli::Args::parse();

    // Carrega o asset de conhecimento (arquivo em data/ ou semente embutida).
    // Arquivo corrompido é erro fatal aqui — melhor falhar na partida do
    // que diagnosticar com uma base errada.
    let asset = persistence::load_asset()?;

    // Modo utilitário: materializa o asset em data/knowledge.json e sai.
    if args.export_knowledge {
        persistence::save_asset(&asset)?;
        println!("Base de conhecimento exportada para data/knowledge.json.");
        println!("Edite o arquivo e rode novamente — o disco passa a ser a fonte de verdade.");
        return Ok(());
    }

    // Constrói os contêineres de domínio. A validação das regras roda
    // aqui, uma única vez — nenhum erro de dado sobrevive até a inferência.
    let KnowledgeAsset {
        rules,
        medications,
        categories,
        risk: risk_model,
    } = asset;
    let kb = KnowledgeBase::new(rules).context("Asset de conhecimento com regra malformada")?;
    let catalog = MedicationCatalog::new(medications);
    tracing::info!(
        rules = kb.rule_count(),
        conditions = catalog.condition_count(),
        "base de conhecimento pronta"
    );

    // Modo utilitário: lista os sintomas aceitos, por categoria, e sai.
    if args.list_symptoms {
        print_symptom_guide(&categories, &kb);
        return Ok(());
    }

    // "Nenhum sintoma" é erro de interface, antes de chegar ao núcleo.
    if let Err(message) = args.validate() {
        eprintln!("{message}");
        std::process::exit(2);
    }

    let observed: BTreeSet<SymptomToken> = args.symptoms.iter().cloned().collect();

    // Tokens fora do vocabulário são entrada legal (nunca casam), mas
    // quase sempre indicam digitação errada — avisa sem interromper.
    let vocabulary = kb.symptom_vocabulary();
    for token in &observed {
        if !vocabulary.contains(token.as_str()) {
            tracing::warn!(token = %token, "sintoma fora do vocabulário das regras");
        }
    }

    // ─── Consulta ───────────────────────────────────────────────────────

    let derived = InferenceEngine::closure(&kb, &observed);
    let ranking = InferenceEngine::ranked(&kb, &observed);
    let risk_score = risk_model.assess(observed.iter(), args.age, args.pain);

    // ─── Relatório ──────────────────────────────────────────────────────

    println!("Sintomas observados: {}", args.symptoms.join(", "));
    println!("Paciente: {} | dor {}/10", args.age.label(), args.pain);
    println!();

    if derived.is_empty() && ranking.is_empty() {
        println!("Nenhum diagnóstico compatível. Procure um médico.");
    } else {
        print_closure_section(&derived, &kb, &catalog);
        print_ranking_section(&ranking);
    }

    println!();
    println!(
        "Risco do quadro: {} (escore {:.1})",
        risk_score.level.label(),
        risk_score.value
    );

    Ok(())
}

/// Imprime os fatos novos do fecho, com medicamentos e orientações.
fn print_closure_section(
    derived: &BTreeSet<String>,
    kb: &KnowledgeBase,
    catalog: &MedicationCatalog,
) {
    if derived.is_empty() {
        println!("Diagnóstico (fecho): nenhum quadro completo casou com os sintomas.");
        return;
    }

    for condition in derived {
        println!("Diagnóstico: {}", humanize_label(condition));

        let meds = catalog.lookup(condition);
        if meds.is_empty() {
            println!("  (sem medicamentos catalogados para esta condição)");
        } else {
            println!("  Medicamentos recomendados:");
            for line in medication_lines(meds) {
                println!("{line}");
            }
        }

        if let Some(care) = kb.advice_for(condition) {
            if let Some(exercise) = &care.exercise {
                println!("  Exercício: {exercise}");
            }
            if let Some(diet) = &care.diet {
                println!("  Dieta: {diet}");
            }
        }
        println!();
    }
}

/// Monta as linhas de medicamentos de uma condição a partir dos registros
/// decorados com o aviso.
///
/// Os campos do [`MedicationAdvice`] são a única fonte das linhas — o que
/// o relatório mostra é exatamente o que a decoração devolveu, aviso
/// incluído.
fn medication_lines(meds: &[MedicationInfo]) -> Vec<String> {
    let advices: Vec<MedicationAdvice> = meds
        .iter()
        .map(|med| med.with_warning(MEDICATION_WARNING))
        .collect();

    let mut lines: Vec<String> = advices
        .iter()
        .map(|advice| {
            format!(
                "  - {}: {} — {}",
                advice.name, advice.description, advice.usage
            )
        })
        .collect();

    // aviso único por condição: todos os registros carregam o mesmo texto
    if let Some(advice) = advices.first() {
        lines.push(format!("  ⚠ {}", advice.warning));
    }
    lines
}

/// Imprime o ranking de condições prováveis por casamento parcial.
fn print_ranking_section(ranking: &[inference::Diagnosis]) {
    if ranking.is_empty() {
        println!("Condições prováveis: nenhuma acima do limiar de confiança.");
        return;
    }

    println!("Condições prováveis (casamento parcial):");
    for diagnosis in ranking {
        println!("  - {diagnosis}");
    }
}

/// Imprime o guia de sintomas aceitos, agrupados por categoria.
///
/// Tokens presentes nas regras mas ausentes das categorias aparecem ao
/// final, para o guia nunca esconder vocabulário válido.
fn print_symptom_guide(categories: &[persistence::SymptomCategory], kb: &KnowledgeBase) {
    println!("Sintomas aceitos (use os tokens exatamente como listados):");
    println!();

    let mut categorized: BTreeSet<&str> = BTreeSet::new();
    for category in categories {
        println!("{}:", category.name);
        for token in &category.symptoms {
            println!("  - {token}");
            categorized.insert(token.as_str());
        }
        println!();
    }

    let uncategorized: Vec<&str> = kb
        .symptom_vocabulary()
        .into_iter()
        .filter(|t| !categorized.contains(t))
        .collect();
    if !uncategorized.is_empty() {
        println!("Sem categoria:");
        for token in uncategorized {
            println!("  - {token}");
        }
    }
}
