//! # CLI — Interface de Linha de Comando
//!
//! Colaborador de apresentação do núcleo: coleta os sintomas e o
//! contexto (faixa etária, dor) na linha de comando e deixa toda a
//! decisão para o motor de inferência.
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Consulta com três sintomas, paciente idoso com dor 6
//! diagnostic-advisor joint_pain morning_stiffness swelling --age senior --pain 6
//!
//! # Ver os sintomas aceitos, agrupados por categoria
//! diagnostic-advisor --list-symptoms
//!
//! # Materializar a base embutida em data/knowledge.json para edição
//! diagnostic-advisor --export-knowledge
//! ```

use clap::Parser;

use crate::risk::AgeGroup;

/// Conselheiro diagnóstico por regras — sintomas entram, condições e riscos saem.
#[derive(Parser, Debug)]
#[command(name = "diagnostic-advisor")]
#[command(about = "Conselheiro diagnóstico por encadeamento de regras", long_about = None)]
pub struct Args {
    /// Tokens de sintoma observados (ex: joint_pain morning_stiffness)
    #[arg(value_name = "SINTOMA")]
    pub symptoms: Vec<String>,

    /// Faixa etária do paciente
    #[arg(long, default_value = "adult")]
    pub age: AgeGroup,

    /// Intensidade de dor relatada, de 0 a 10
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub pain: u8,

    /// Lista os sintomas aceitos, agrupados por categoria, e sai
    #[arg(long)]
    pub list_symptoms: bool,

    /// Exporta a base de conhecimento para data/knowledge.json e sai
    #[arg(long)]
    pub export_knowledge: bool,
}

impl Args {
    /// Valida a combinação de argumentos antes de consultar o núcleo.
    ///
    /// "Nenhum sintoma selecionado" é erro **da interface**, não do
    /// motor — o núcleo trata conjunto vazio como entrada legal e
    /// devolve resultado vazio, mas aqui isso seria uma consulta sem
    /// sentido para o usuário.
    pub fn validate(&self) -> Result<(), String> {
        if !self.list_symptoms && !self.export_knowledge && self.symptoms.is_empty() {
            return Err(
                "Selecione pelo menos um sintoma! Use --list-symptoms para ver os aceitos."
                    .to_string(),
            );
        }
        Ok(())
    }
}
