//! Predict command - prices one flat from command-line flags

use anyhow::Context;
use clap::Args;

use crate::config::ModelConfig;
use crate::domain::{validate_input, Price, ResaleFlatInput};
use crate::infrastructure::model::create_model_source;
use crate::infrastructure::services::{PredictionService, PredictionServiceTrait};

/// Flat attributes for a single prediction
#[derive(Args, Clone, Debug)]
pub struct PredictArgs {
    /// Year of the resale transaction
    #[arg(long)]
    pub year: f64,

    /// Town name, e.g. "ANG MO KIO"
    #[arg(long)]
    pub town: String,

    /// Flat type, e.g. "4 ROOM"
    #[arg(long)]
    pub flat_type: String,

    /// Floor area in square metres
    #[arg(long)]
    pub floor_area: f64,

    /// Flat model, e.g. "Model A"
    #[arg(long)]
    pub flat_model: String,

    #[arg(long)]
    pub storey_start: f64,

    #[arg(long)]
    pub storey_end: f64,

    /// Whole years of lease remaining
    #[arg(long)]
    pub lease_years: f64,

    /// Months of lease remaining beyond the whole years
    #[arg(long)]
    pub lease_months: f64,

    /// Year the lease commenced
    #[arg(long)]
    pub lease_commence: f64,

    /// Model artifact path (overrides configuration)
    #[arg(long)]
    pub model: Option<String>,
}

impl PredictArgs {
    pub fn to_input(&self) -> ResaleFlatInput {
        ResaleFlatInput::new(&self.town, &self.flat_type, &self.flat_model)
            .with_year(self.year)
            .with_floor_area(self.floor_area)
            .with_storey_range(self.storey_start, self.storey_end)
            .with_remaining_lease(self.lease_years, self.lease_months)
            .with_lease_commence_year(self.lease_commence)
    }
}

/// Run the predict command
pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let model_config = model_config(&config.model, args.model.as_deref());

    let price = predict(&args, &model_config).await?;
    println!("{}", render(price));

    Ok(())
}

fn model_config(base: &ModelConfig, override_path: Option<&str>) -> ModelConfig {
    ModelConfig {
        path: override_path.map_or_else(|| base.path.clone(), str::to_string),
        load_policy: base.load_policy,
    }
}

async fn predict(args: &PredictArgs, model_config: &ModelConfig) -> anyhow::Result<Price> {
    let input = args.to_input();
    validate_input(&input).context("Invalid flat details")?;

    let service = PredictionService::new(create_model_source(model_config));
    let prediction = service.predict(&input).await.context("Prediction failed")?;

    Ok(prediction.price)
}

fn render(price: Price) -> String {
    format!("The predicted price is: {}", price)
}
