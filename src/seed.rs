//! # Seed — Base de Referência Embutida
//!
//! Asset de conhecimento padrão do conselheiro: o domínio de referência
//! de **artrite**, com sete condições, seus medicamentos e o modelo de
//! risco calibrado para esse quadro.
//!
//! ## Papel da Semente
//!
//! A semente garante que a primeira execução funcione sem arquivo
//! algum em `data/`. Ela não é privilegiada: `--export-knowledge` a
//! materializa em `data/knowledge.json`, e a partir daí o arquivo
//! editado é a fonte de verdade — o núcleo aceita qualquer asset, este
//! é só o ponto de partida.
//!
//! ## Confianças
//!
//! Cada regra carrega a confiança do quadro clínico que descreve:
//! quadros mais específicos (rigidez matinal + inchaço) pontuam mais
//! alto que quadros que se confundem com outras doenças (sintomas
//! digestivos, sistêmicos).

use std::collections::BTreeMap;

use crate::core::{CareAdvice, MedicationInfo, Rule};
use crate::persistence::{KnowledgeAsset, SymptomCategory};
use crate::risk::{AgeWeights, RiskCutoffs, RiskModel};

/// Atalho local para montar um registro de medicamento.
fn med(name: &str, description: &str, usage: &str) -> MedicationInfo {
    MedicationInfo {
        name: name.to_string(),
        description: description.to_string(),
        usage: usage.to_string(),
    }
}

/// Atalho local para orientações de exercício e dieta.
fn advice(exercise: Option<&str>, diet: Option<&str>) -> CareAdvice {
    CareAdvice {
        exercise: exercise.map(str::to_string),
        diet: diet.map(str::to_string),
    }
}

/// Regras de condição do domínio de artrite, na ordem de desempate.
fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            ["joint_pain", "morning_stiffness", "swelling"],
            "rheumatoid_arthritis",
            0.9,
        )
        .with_advice(advice(
            Some("alongamentos leves pela manhã, sem carga"),
            Some("alimentos anti-inflamatórios (peixes, azeite de oliva)"),
        )),
        Rule::new(
            ["joint_pain", "age_50+", "bone_spurs", "joint_crackling"],
            "osteoarthritis",
            0.85,
        )
        .with_advice(advice(
            Some("fortalecimento muscular de baixo impacto (natação, bicicleta)"),
            Some("controle de peso para aliviar a carga articular"),
        )),
        Rule::new(
            ["joint_pain", "redness", "fever", "chills"],
            "infectious_arthritis",
            0.8,
        ),
        Rule::new(
            ["joint_pain", "skin_rashes", "eye_inflammation", "nail_pitting"],
            "psoriatic_arthritis",
            0.85,
        )
        .with_advice(advice(
            Some("atividade aeróbica moderada, respeitando as crises"),
            None,
        )),
        Rule::new(
            ["joint_pain", "back_pain", "stiff_spine", "fatigue"],
            "ankylosing_spondylitis",
            0.8,
        )
        .with_advice(advice(
            Some("exercícios diários de postura e mobilidade da coluna"),
            None,
        )),
        Rule::new(
            ["joint_pain", "weight_loss", "fever", "night_sweats"],
            "tubercular_arthritis",
            0.75,
        ),
        Rule::new(
            ["joint_pain", "abdominal_pain", "diarrhea"],
            "enteropathic_arthritis",
            0.7,
        )
        .with_advice(advice(
            None,
            Some("dieta leve, acompanhada por gastroenterologista"),
        )),
    ]
}

/// Catálogo condição → medicamentos do domínio de artrite.
fn medications() -> BTreeMap<String, Vec<MedicationInfo>> {
    let mut catalog = BTreeMap::new();

    catalog.insert(
        "rheumatoid_arthritis".to_string(),
        vec![
            med(
                "Methotrexate",
                "Imunossupressor de primeira linha",
                "Dose semanal, com acompanhamento laboratorial",
            ),
            med(
                "Corticosteroids",
                "Anti-inflamatório para controle de crises",
                "Curta duração, sob supervisão médica",
            ),
            med(
                "Biologic Agents",
                "Terapia alvo para casos refratários",
                "Aplicação conforme protocolo do reumatologista",
            ),
        ],
    );

    catalog.insert(
        "osteoarthritis".to_string(),
        vec![
            med(
                "NSAIDs",
                "Anti-inflamatórios não esteroides para dor",
                "Menor dose eficaz, pelo menor tempo possível",
            ),
            med(
                "Acetaminophen",
                "Analgésico de primeira escolha",
                "Respeitar a dose máxima diária",
            ),
            med(
                "Joint Injections",
                "Infiltração intra-articular",
                "Procedimento ambulatorial, quando indicado",
            ),
        ],
    );

    catalog.insert(
        "infectious_arthritis".to_string(),
        vec![
            med(
                "Antibiotics",
                "Tratamento da infecção articular",
                "Esquema completo, sem interrupção precoce",
            ),
            med(
                "Drainage Procedures",
                "Drenagem do líquido articular infectado",
                "Procedimento hospitalar de urgência",
            ),
        ],
    );

    catalog.insert(
        "psoriatic_arthritis".to_string(),
        vec![
            med(
                "DMARDs",
                "Modificadores do curso da doença",
                "Uso contínuo com reavaliação periódica",
            ),
            med(
                "Biologics",
                "Terapia alvo para pele e articulações",
                "Aplicação conforme protocolo do especialista",
            ),
            med(
                "NSAIDs",
                "Controle sintomático da dor",
                "Menor dose eficaz, pelo menor tempo possível",
            ),
        ],
    );

    catalog.insert(
        "ankylosing_spondylitis".to_string(),
        vec![
            med(
                "NSAIDs",
                "Primeira linha para dor e rigidez axial",
                "Uso regular conforme prescrição",
            ),
            med(
                "TNF Blockers",
                "Biológico para doença axial ativa",
                "Indicado quando NSAIDs não bastam",
            ),
            med(
                "Physical Therapy",
                "Programa postural supervisionado",
                "Sessões regulares, manutenção em casa",
            ),
        ],
    );

    catalog.insert(
        "tubercular_arthritis".to_string(),
        vec![
            med(
                "Anti-Tubercular Drugs (Rifampicin, Isoniazid)",
                "Esquema padrão contra o bacilo",
                "Tratamento prolongado, adesão estrita",
            ),
            med(
                "Pain Relievers",
                "Suporte sintomático durante o esquema",
                "Conforme orientação médica",
            ),
        ],
    );

    catalog.insert(
        "enteropathic_arthritis".to_string(),
        vec![
            med(
                "Corticosteroids",
                "Controle conjunto do intestino e das articulações",
                "Curta duração, com desmame gradual",
            ),
            med(
                "Immunosuppressants",
                "Manutenção em doença intestinal ativa",
                "Uso contínuo com acompanhamento",
            ),
        ],
    );

    catalog
}

/// Categorias de sintomas na ordem de exibição da interface.
fn categories() -> Vec<SymptomCategory> {
    let category = |name: &str, symptoms: &[&str]| SymptomCategory {
        name: name.to_string(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        category(
            "Articulares",
            &["joint_pain", "joint_crackling", "morning_stiffness", "swelling"],
        ),
        category(
            "Sistêmicos",
            &["fever", "chills", "fatigue", "weight_loss", "night_sweats"],
        ),
        category("Pele", &["skin_rashes", "nail_pitting"]),
        category(
            "Outros",
            &[
                "age_50+",
                "bone_spurs",
                "back_pain",
                "stiff_spine",
                "eye_inflammation",
                "abdominal_pain",
                "diarrhea",
                "redness",
            ],
        ),
    ]
}

/// Modelo de risco calibrado para o domínio de artrite.
fn risk_model() -> RiskModel {
    let weights: &[(&str, f64)] = &[
        ("joint_pain", 4.0),
        ("joint_crackling", 1.0),
        ("morning_stiffness", 2.0),
        ("swelling", 3.0),
        ("fever", 5.0),
        ("chills", 3.0),
        ("fatigue", 2.0),
        ("weight_loss", 4.0),
        ("night_sweats", 3.0),
        ("skin_rashes", 2.0),
        ("nail_pitting", 1.0),
        ("age_50+", 2.0),
        ("bone_spurs", 2.0),
        ("back_pain", 3.0),
        ("stiff_spine", 3.0),
        ("eye_inflammation", 3.0),
        ("abdominal_pain", 3.0),
        ("diarrhea", 2.0),
        ("redness", 2.0),
    ];

    RiskModel {
        symptom_weights: weights
            .iter()
            .map(|(token, w)| (token.to_string(), *w))
            .collect(),
        age_weights: AgeWeights {
            child: 1.0,
            adult: 2.0,
            senior: 5.0,
        },
        pain_factor: 0.5,
        cutoffs: RiskCutoffs::default(),
    }
}

/// Monta o asset de referência completo.
pub fn default_asset() -> KnowledgeAsset {
    KnowledgeAsset {
        rules: rules(),
        medications: medications(),
        categories: categories(),
        risk: risk_model(),
    }
}
