use ade_core::{
    assess, lookup_interaction, AlertLevel, Assessment, CoreConfig, ScoringPolicy,
    DEFAULT_BASELINE_CREATININE, DEFAULT_INR,
};
use api_shared::{patient_factors_from_request, CalculateReq, CalculateRes, InteractionRes};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ade")]
#[command(about = "Adverse drug event risk calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a patient for bleeding, hypoglycemia, AKI and fragility
    Score(ScoreArgs),
    /// Check two drugs for a known interaction
    Interaction {
        /// First drug name
        drug_a: String,
        /// Second drug name
        drug_b: String,
        /// Print the REST response shape as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ScoreArgs {
    /// Age in years (18-100)
    #[arg(long)]
    age: u32,
    /// Male or Female
    #[arg(long)]
    gender: String,
    /// Weight in kg
    #[arg(long)]
    weight: f64,
    /// Height in cm (not used by scoring)
    #[arg(long)]
    height: Option<f64>,
    /// "Non-Hispanic Black" or "Other"
    #[arg(long, default_value = "Other")]
    race: String,
    #[arg(long, default_value_t = DEFAULT_INR)]
    inr: f64,
    /// Baseline creatinine in mg/dL
    #[arg(long, default_value_t = DEFAULT_BASELINE_CREATININE)]
    creatinine: f64,

    #[arg(long)]
    anticoagulant: bool,
    #[arg(long)]
    antiplatelet: bool,
    #[arg(long)]
    gi_bleed: bool,
    #[arg(long)]
    uncontrolled_bp: bool,
    #[arg(long)]
    smoking: bool,
    #[arg(long)]
    alcohol: bool,
    #[arg(long)]
    antibiotic_order: bool,
    /// Significant dietary vitamin-K change
    #[arg(long)]
    dietary_change: bool,
    #[arg(long)]
    liver_disease: bool,
    /// History of stroke/TIA
    #[arg(long)]
    prior_stroke: bool,
    #[arg(long)]
    insulin: bool,
    /// HbA1c above 9.0%
    #[arg(long)]
    high_hba1c: bool,
    #[arg(long)]
    neuropathy: bool,
    #[arg(long)]
    impaired_renal: bool,
    /// Recent DKA/HHS admission
    #[arg(long)]
    recent_dka: bool,
    #[arg(long)]
    diuretic: bool,
    #[arg(long)]
    acei_arb: bool,
    #[arg(long)]
    active_chemo: bool,
    /// Recent contrast dye exposure
    #[arg(long)]
    contrast: bool,

    /// Drop the race-based AKI weight
    #[arg(long)]
    no_race_adjustment: bool,
    /// Print the REST response shape as JSON
    #[arg(long)]
    json: bool,
}

impl ScoreArgs {
    fn to_request(&self) -> CalculateReq {
        CalculateReq {
            age: self.age,
            gender: self.gender.clone(),
            weight: self.weight,
            height: self.height,
            race: self.race.clone(),
            inr: self.inr,
            baseline_creat: self.creatinine,
            antibiotic_order: self.antibiotic_order,
            dietary_change: self.dietary_change,
            contrast_exposure: self.contrast,
            on_anticoag: self.anticoagulant,
            on_antiplatelet: self.antiplatelet,
            on_insulin: self.insulin,
            on_diuretic: self.diuretic,
            on_acei_arb: self.acei_arb,
            prior_stroke: self.prior_stroke,
            hist_gi_bleed: self.gi_bleed,
            uncontrolled_bp: self.uncontrolled_bp,
            smoking_calc: self.smoking,
            alcohol_use: self.alcohol,
            liver_disease: self.liver_disease,
            high_hba1c: self.high_hba1c,
            neuropathy_history: self.neuropathy,
            impaired_renal: self.impaired_renal,
            recent_dka: self.recent_dka,
            active_chemo: self.active_chemo,
        }
    }
}

fn score_lines(assessment: &Assessment) -> Vec<String> {
    let scores = &assessment.scores;
    [
        ("Bleeding risk:", scores.bleeding),
        ("Hypoglycemia risk:", scores.hypoglycemia),
        ("AKI risk:", scores.aki),
        ("Clinical fragility index:", scores.fragility),
    ]
    .into_iter()
    .map(|(label, score)| format!("{label:<26}{score}"))
    .collect()
}

fn render(assessment: &Assessment) {
    for line in score_lines(assessment) {
        println!("{line}");
    }
    println!();

    for (category, level) in assessment.category_levels() {
        if level.is_actionable() {
            println!("  {} {} ALERT", category, level);
        }
    }

    println!("{}", assessment.summary());
    if assessment.primary.level != AlertLevel::Manageable {
        println!("{}", assessment.primary.rationale);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Score(args)) => {
            let factors = patient_factors_from_request(&args.to_request())?;
            let policy = if args.no_race_adjustment {
                ScoringPolicy::without_demographic_proxies()
            } else {
                ScoringPolicy::default()
            };
            let cfg = CoreConfig::new(policy);

            let assessment = assess(&factors, cfg.scoring_policy());
            if args.json {
                let res = CalculateRes::from(&assessment);
                println!("{}", serde_json::to_string_pretty(&res)?);
            } else {
                render(&assessment);
            }
        }
        Some(Commands::Interaction {
            drug_a,
            drug_b,
            json,
        }) => {
            let result = lookup_interaction(&drug_a, &drug_b);
            if json {
                let res = InteractionRes::from_lookup(result);
                println!("{}", serde_json::to_string_pretty(&res)?);
            } else {
                println!("Result: {}", result);
            }
        }
        None => {
            println!("Use 'ade --help' for commands");
        }
    }

    Ok(())
}
