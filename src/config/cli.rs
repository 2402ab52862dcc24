use crate::domain::model::{ClockFormat, CoffeeIntake, SleepAmount, WakeTime};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "better-rest")]
#[command(about = "Recommends a bedtime from your wake time, sleep goal and coffee intake")]
pub struct CliConfig {
    /// When do you want to wake up? (HH:MM)
    #[arg(long, default_value = "09:00")]
    pub wake: String,

    /// Desired amount of sleep in hours (4-12, quarter-hour steps)
    #[arg(long, default_value = "7.5")]
    pub sleep: f64,

    /// Daily coffee intake in cups (0-20)
    #[arg(long, default_value = "0")]
    pub coffee: u32,

    /// Path to a sleep model artifact (defaults to the bundled model)
    #[arg(long)]
    pub model: Option<String>,

    #[arg(long, value_enum, default_value = "24h")]
    pub clock: ClockFormat,

    #[arg(long, help = "Print the bedtime as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn wake_time(&self) -> Result<WakeTime> {
        self.wake.parse()
    }

    pub fn sleep_amount(&self) -> SleepAmount {
        SleepAmount(self.sleep)
    }

    pub fn coffee_intake(&self) -> CoffeeIntake {
        CoffeeIntake(self.coffee)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.wake_time()?;

        validation::validate_range("sleep", self.sleep, SleepAmount::MIN, SleepAmount::MAX)?;
        validation::validate_step("sleep", self.sleep, SleepAmount::MIN, SleepAmount::STEP)?;
        validation::validate_range("coffee", self.coffee, 0, CoffeeIntake::MAX)?;
        if let Some(path) = &self.model {
            validation::validate_path("model", path)?;
        }

        Ok(())
    }
}
