//! Static reference data for the trackers.
//!
//! All tables are immutable; the string-heavy ones are built once on first access. Lookups into the
//! age- and week-keyed tables go through [`nearest_index`], which never
//! interpolates between bands.

use once_cell::sync::Lazy;
use shared::{Gender, GrowthMetric, SubscriptionTier, Tip, WeekInfo};

/// Gestational weeks that carry a milestone entry
pub const PREGNANCY_MILESTONE_WEEKS: [u32; 10] = [4, 8, 12, 16, 20, 24, 28, 32, 36, 40];

/// Ages in months covered by the growth standards
pub const GROWTH_REFERENCE_AGES: [u32; 8] = [0, 6, 12, 24, 36, 60, 120, 156];

/// Ages in months covered by the development milestones
pub const DEVELOPMENT_MILESTONE_AGES: [u32; 10] = [0, 3, 6, 9, 12, 18, 24, 36, 48, 60];

/// Position of the key closest to `target`.
///
/// Keys are scanned in order and the current best is only replaced on a
/// strictly smaller distance, so with ascending keys a target exactly midway
/// between two keys resolves to the smaller one. An empty sequence yields 0.
pub fn nearest_index(keys: impl IntoIterator<Item = u32>, target: u32) -> usize {
    let mut best: Option<(usize, u32)> = None;
    for (index, key) in keys.into_iter().enumerate() {
        let distance = key.abs_diff(target);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index).unwrap_or(0)
}

/// Closest key to `target`, or `None` for an empty key list
pub fn nearest_key(keys: &[u32], target: u32) -> Option<u32> {
    keys.get(nearest_index(keys.iter().copied(), target)).copied()
}

/// P3/P50/P97 thresholds for one age band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileThresholds {
    pub p3: f64,
    pub p50: f64,
    pub p97: f64,
}

const fn band(p3: f64, p50: f64, p97: f64) -> PercentileThresholds {
    PercentileThresholds { p3, p50, p97 }
}

/// Thresholds per age in months, ordered by age
pub type StandardRow = [(u32, PercentileThresholds); 8];

const MALE_WEIGHT: StandardRow = [
    (0, band(2.5, 3.3, 4.4)),
    (6, band(6.4, 7.9, 9.8)),
    (12, band(7.7, 9.6, 12.0)),
    (24, band(9.7, 12.2, 15.3)),
    (36, band(11.3, 14.3, 18.3)),
    (60, band(14.1, 18.3, 24.2)),
    (120, band(24.0, 35.5, 51.5)),
    (156, band(34.0, 50.5, 72.0)),
];

const MALE_HEIGHT: StandardRow = [
    (0, band(46.1, 49.9, 53.7)),
    (6, band(63.3, 67.6, 72.0)),
    (12, band(71.0, 75.7, 80.5)),
    (24, band(81.7, 87.1, 93.0)),
    (36, band(88.7, 96.1, 103.5)),
    (60, band(101.7, 110.0, 119.2)),
    (120, band(128.0, 145.0, 163.0)),
    (156, band(148.0, 169.0, 188.0)),
];

const FEMALE_WEIGHT: StandardRow = [
    (0, band(2.4, 3.2, 4.2)),
    (6, band(5.7, 7.3, 9.3)),
    (12, band(7.0, 8.9, 11.2)),
    (24, band(9.0, 11.5, 14.8)),
    (36, band(10.8, 13.9, 18.1)),
    (60, band(13.7, 18.2, 24.9)),
    (120, band(23.5, 36.0, 54.0)),
    (156, band(34.0, 52.0, 76.0)),
];

const FEMALE_HEIGHT: StandardRow = [
    (0, band(45.4, 49.1, 52.9)),
    (6, band(61.2, 65.7, 70.3)),
    (12, band(68.9, 74.0, 79.2)),
    (24, band(80.0, 86.4, 92.9)),
    (36, band(87.4, 95.1, 103.0)),
    (60, band(100.0, 109.0, 118.9)),
    (120, band(127.0, 144.0, 162.0)),
    (156, band(147.0, 160.0, 173.0)),
];

/// WHO-derived growth standard for a gender and metric
pub fn growth_standard_row(gender: Gender, metric: GrowthMetric) -> &'static StandardRow {
    match (gender, metric) {
        (Gender::Male, GrowthMetric::Weight) => &MALE_WEIGHT,
        (Gender::Male, GrowthMetric::Height) => &MALE_HEIGHT,
        (Gender::Female, GrowthMetric::Weight) => &FEMALE_WEIGHT,
        (Gender::Female, GrowthMetric::Height) => &FEMALE_HEIGHT,
    }
}

/// Reference age band and thresholds nearest to `age_months`
pub fn nearest_growth_standard(
    gender: Gender,
    metric: GrowthMetric,
    age_months: u32,
) -> (u32, PercentileThresholds) {
    let row = growth_standard_row(gender, metric);
    row[nearest_index(row.iter().map(|(age, _)| *age), age_months)]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn week(
    week: u32,
    title: &str,
    baby_size: &str,
    baby_weight: &str,
    development: &[&str],
    mother_tips: &[&str],
) -> WeekInfo {
    WeekInfo {
        week,
        title: title.to_string(),
        baby_size: baby_size.to_string(),
        baby_weight: baby_weight.to_string(),
        development: strings(development),
        mother_tips: strings(mother_tips),
    }
}

/// Milestone information for each week in [`PREGNANCY_MILESTONE_WEEKS`], ordered by week
pub static WEEKLY_INFO: Lazy<Vec<WeekInfo>> = Lazy::new(|| {
    vec![
        week(
            4,
            "Início da Jornada",
            "Semente de papoula (2mm)",
            "< 1g",
            &[
                "Implantação do embrião no útero",
                "Formação inicial do sistema nervoso",
                "Início da produção de hCG",
            ],
            &[
                "Comece a tomar ácido fólico (400-800mcg/dia)",
                "Evite álcool e tabaco",
                "Agende consulta com obstetra",
            ],
        ),
        week(
            8,
            "Desenvolvimento Rápido",
            "Framboesa (1,6cm)",
            "1g",
            &[
                "Formação de dedos das mãos e pés",
                "Coração batendo regularmente",
                "Início da formação dos órgãos principais",
            ],
            &[
                "Mantenha-se hidratada",
                "Faça refeições pequenas e frequentes",
                "Descanse quando sentir necessidade",
            ],
        ),
        week(
            12,
            "Fim do Primeiro Trimestre",
            "Ameixa (5,4cm)",
            "14g",
            &[
                "Todos os órgãos vitais formados",
                "Reflexos começam a aparecer",
                "Sistema digestivo funcionando",
            ],
            &[
                "Realize o ultrassom de translucência nucal",
                "Náuseas podem começar a diminuir",
                "Continue com vitaminas pré-natais",
            ],
        ),
        week(
            16,
            "Segundo Trimestre",
            "Abacate (11,6cm)",
            "100g",
            &[
                "Movimentos mais coordenados",
                "Audição em desenvolvimento",
                "Padrões de sono estabelecidos",
            ],
            &[
                "Você pode começar a sentir movimentos",
                "Mantenha atividade física leve",
                "Hidrate-se bem",
            ],
        ),
        week(
            20,
            "Metade da Gestação",
            "Banana (16,4cm)",
            "300g",
            &[
                "Vérnix (camada protetora) se forma",
                "Cabelo e unhas crescendo",
                "Bebê pode ouvir sons externos",
            ],
            &[
                "Ultrassom morfológico",
                "Comece a pensar em nomes",
                "Converse com seu bebê",
            ],
        ),
        week(
            24,
            "Viabilidade Fetal",
            "Espiga de milho (30cm)",
            "600g",
            &[
                "Pulmões em desenvolvimento",
                "Papilas gustativas funcionando",
                "Padrões de sono regulares",
            ],
            &[
                "Faça o teste de diabetes gestacional",
                "Monitore ganho de peso",
                "Pratique exercícios de respiração",
            ],
        ),
        week(
            28,
            "Terceiro Trimestre",
            "Berinjela (37,6cm)",
            "1kg",
            &[
                "Olhos podem abrir e fechar",
                "Cérebro em rápido desenvolvimento",
                "Pode sonhar",
            ],
            &[
                "Consultas mais frequentes",
                "Prepare o enxoval",
                "Considere curso de preparação para o parto",
            ],
        ),
        week(
            32,
            "Crescimento Acelerado",
            "Abóbora (42,4cm)",
            "1,7kg",
            &[
                "Camadas de gordura se formam",
                "Unhas completamente formadas",
                "Posição para o parto",
            ],
            &[
                "Monitore movimentos fetais",
                "Prepare a mala da maternidade",
                "Descanse com pernas elevadas",
            ],
        ),
        week(
            36,
            "Quase Lá",
            "Melão (47,4cm)",
            "2,6kg",
            &[
                "Pulmões quase maduros",
                "Sistema imunológico fortalecido",
                "Ganhando peso rapidamente",
            ],
            &[
                "Consultas semanais",
                "Finalize preparativos",
                "Pratique técnicas de respiração",
            ],
        ),
        week(
            40,
            "Hora do Encontro",
            "Melancia (51,2cm)",
            "3,4kg",
            &[
                "Totalmente desenvolvido",
                "Pronto para nascer",
                "Aguardando o momento certo",
            ],
            &[
                "Fique atenta aos sinais de trabalho de parto",
                "Mantenha-se calma e confiante",
                "Logo você conhecerá seu bebê!",
            ],
        ),
    ]
});

/// Week information for the milestone week nearest to `week`
pub fn nearest_week_info(week: u32) -> &'static WeekInfo {
    &WEEKLY_INFO[nearest_index(WEEKLY_INFO.iter().map(|info| info.week), week)]
}

/// Symptoms that require immediate medical attention during pregnancy
pub const PREGNANCY_WARNING_SIGNS: [&str; 5] = [
    "Sangramento vaginal intenso",
    "Dor abdominal severa ou persistente",
    "Diminuição ou ausência de movimentos fetais",
    "Febre alta (acima de 38°C)",
    "Visão turva ou dor de cabeça intensa",
];

/// Expected development milestones by age in months, ordered by age
pub const DEVELOPMENT_MILESTONES: [(u32, &[&str]); 10] = [
    (0, &["Reflexos primitivos", "Foco visual limitado", "Reconhece voz materna"]),
    (3, &["Sustenta a cabeça", "Sorri socialmente", "Segue objetos com os olhos"]),
    (6, &["Senta com apoio", "Balbucia", "Pega objetos", "Rola"]),
    (9, &["Senta sem apoio", "Engatinha", "Diz 'mamã' e 'papá'", "Brinca de esconde-esconde"]),
    (12, &["Primeiros passos", "Primeiras palavras", "Aponta para objetos", "Bebe no copo"]),
    (18, &["Corre", "Sobe escadas", "Usa colher", "Vocabulário de 10-20 palavras"]),
    (24, &["Chuta bola", "Frases de 2 palavras", "Imita adultos", "Brinca ao lado de outras crianças"]),
    (36, &["Pedala triciclo", "Frases completas", "Usa banheiro", "Brinca de faz de conta"]),
    (48, &["Pula em um pé", "Conta histórias", "Desenha círculos", "Brinca cooperativamente"]),
    (60, &["Equilibra-se em um pé", "Conta até 10", "Escreve algumas letras", "Segue regras de jogos"]),
];

/// Milestones for the age band nearest to `age_months`
pub fn nearest_development_milestones(age_months: u32) -> (u32, &'static [&'static str]) {
    DEVELOPMENT_MILESTONES[nearest_index(DEVELOPMENT_MILESTONES.iter().map(|(age, _)| *age), age_months)]
}

/// Advanced fertility advice shown on tiers with advanced features
pub static FERTILITY_TIPS: Lazy<Vec<Tip>> = Lazy::new(|| {
    [
        ("Hidratação", "Beba pelo menos 2 litros de água por dia para melhorar a qualidade do muco cervical."),
        ("Alimentação", "Consuma alimentos ricos em ácido fólico, ferro e ômega-3."),
        ("Exercícios", "Pratique atividades físicas moderadas regularmente para equilibrar hormônios."),
        ("Sono", "Durma de 7-9 horas por noite para otimizar a produção hormonal."),
        ("Estresse", "Pratique técnicas de relaxamento como meditação e yoga."),
        ("Temperatura Basal", "Monitore sua temperatura corporal pela manhã para identificar padrões de ovulação."),
        ("Suplementação", "Considere suplementos de vitamina D, CoQ10 e inositol após consulta médica."),
    ]
    .into_iter()
    .map(|(title, body)| Tip {
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
});

/// Catalog entry for a subscription plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDefinition {
    pub tier: SubscriptionTier,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
    pub popular: bool,
}

pub static PLAN_CATALOG: Lazy<Vec<PlanDefinition>> = Lazy::new(|| {
    vec![
        PlanDefinition {
            tier: SubscriptionTier::Free,
            price: "R$ 0",
            period: "/mês",
            features: &[
                "Registro básico do ciclo",
                "Acompanhamento de 1 criança",
                "Dados salvos localmente",
                "Anúncios ocasionais",
            ],
            limitations: &[
                "Sem previsões avançadas",
                "Sem exportação de dados",
                "Sem suporte prioritário",
            ],
            popular: false,
        },
        PlanDefinition {
            tier: SubscriptionTier::Premium,
            price: "R$ 19,90",
            period: "/mês",
            features: &[
                "Todas as funcionalidades gratuitas",
                "Previsões avançadas de fertilidade",
                "Acompanhamento de até 3 crianças",
                "Exportação de dados em PDF",
                "Gráficos e análises detalhadas",
                "Sem anúncios",
                "Suporte prioritário",
            ],
            limitations: &[],
            popular: true,
        },
        PlanDefinition {
            tier: SubscriptionTier::Family,
            price: "R$ 29,90",
            period: "/mês",
            features: &[
                "Todas as funcionalidades Premium",
                "Até 5 perfis de usuário",
                "Compartilhamento de dados entre perfis",
                "Lembretes personalizados",
                "Consultas com especialistas (1x/mês)",
                "Acesso antecipado a novos recursos",
            ],
            limitations: &[],
            popular: false,
        },
    ]
});

pub fn plan_definition(tier: SubscriptionTier) -> Option<&'static PlanDefinition> {
    PLAN_CATALOG.iter().find(|plan| plan.tier == tier)
}
