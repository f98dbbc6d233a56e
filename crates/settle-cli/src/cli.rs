//! Command definitions and handlers.
//!
//! Each command takes a clap `Args` wrapper that converts into a core
//! parameter type with `From`, so clap stays out of `settle-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner → Display → Renderer
//! ```

use std::{fs, io::Read, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use settle_core::{
    display::{
        Accounts, CreateResult, DeleteResult, OperationStatus, PaymentPlans, Percent,
        UpdateResult, Waterfall,
    },
    models::{
        AccountSnapshot, PaymentActionStatus, PaymentFrequency, PaymentStatus, PaymentTask,
        PlanType, Preferences,
    },
    params::{CreatePlans, Id, ListPlans, UpdateAction, UpdatePlan, UserId},
    Planner,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Plan commands
// ============================================================================

/// Build payment plans from a JSON file of payment tasks
///
/// The file holds an array of tasks, each with `id`, `user_id`, `account_id`
/// and `amount`. Pass `-` to read from stdin. Every preference left unset is
/// expanded, so one call can return several candidate plans.
#[derive(Args)]
pub struct CreatePlansArgs {
    /// JSON file with the payment tasks, or `-` for stdin
    pub tasks_file: PathBuf,
    /// Restrict to one allocation strategy
    #[arg(long, value_enum)]
    pub plan_type: Option<PlanTypeArg>,
    /// Timeline in months
    #[arg(long, allow_negative_numbers = true)]
    pub timeline: Option<f64>,
    /// Payment frequency
    #[arg(long, value_enum)]
    pub frequency: Option<FrequencyArg>,
    /// Store the plans so they can be tracked later
    #[arg(long)]
    pub save: bool,
    /// Print the plans as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl CreatePlansArgs {
    fn preferences(&self) -> Preferences {
        Preferences {
            plan_type: self.plan_type.map(Into::into),
            timeline_months: self.timeline,
            payment_frequency: self.frequency.map(Into::into),
        }
    }

    fn read_tasks(&self) -> Result<Vec<PaymentTask>> {
        let content = if self.tasks_file.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read tasks from stdin")?;
            buffer
        } else {
            fs::read_to_string(&self.tasks_file).with_context(|| {
                format!("Failed to read tasks file {}", self.tasks_file.display())
            })?
        };

        serde_json::from_str(&content).context("Tasks must be a JSON array of payment tasks")
    }
}

/// List stored payment plans, newest first
#[derive(Args)]
pub struct ListPlansArgs {
    /// Only plans of this user
    #[arg(long)]
    pub user: Option<String>,
    /// Include inactive plans
    #[arg(long)]
    pub all: bool,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            user_id: val.user,
            all: val.all,
        }
    }
}

/// Identifies one stored plan
#[derive(Args)]
pub struct PlanIdArgs {
    /// ID of the payment plan
    pub id: u64,
}

impl From<PlanIdArgs> for Id {
    fn from(val: PlanIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Change a plan's status or activity
#[derive(Args)]
pub struct UpdatePlanArgs {
    /// ID of the payment plan
    pub id: u64,
    /// New plan status
    #[arg(long, value_enum)]
    pub status: Option<PlanStatusArg>,
    /// Mark the plan active
    #[arg(long, conflicts_with = "inactive")]
    pub active: bool,
    /// Mark the plan inactive
    #[arg(long)]
    pub inactive: bool,
}

impl From<UpdatePlanArgs> for UpdatePlan {
    fn from(val: UpdatePlanArgs) -> Self {
        let active = match (val.active, val.inactive) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        UpdatePlan {
            id: val.id,
            active,
            status: val.status.map(Into::into),
        }
    }
}

/// Record the outcome of one scheduled payment
#[derive(Args)]
pub struct UpdateActionArgs {
    /// ID of the payment plan
    pub plan_id: u64,
    /// 0-based position of the payment in the schedule
    pub position: u32,
    /// New payment status
    #[arg(value_enum)]
    pub status: ActionStatusArg,
}

impl From<UpdateActionArgs> for UpdateAction {
    fn from(val: UpdateActionArgs) -> Self {
        UpdateAction {
            plan_id: val.plan_id,
            position: val.position,
            status: val.status.into(),
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Build payment plans from payment tasks
    #[command(alias = "c")]
    Create(CreatePlansArgs),
    /// List stored plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show one stored plan
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Change a plan's status or activity
    #[command(alias = "u")]
    Update(UpdatePlanArgs),
    /// Record the outcome of one scheduled payment
    Action(UpdateActionArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(PlanIdArgs),
}

// ============================================================================
// Account commands
// ============================================================================

/// Store or replace an account snapshot
#[derive(Args)]
pub struct AddAccountArgs {
    /// Account identifier referenced by payment tasks
    pub id: String,
    /// Owner of the account
    #[arg(long)]
    pub user: Option<String>,
    /// Current balance
    #[arg(long, allow_negative_numbers = true)]
    pub balance: f64,
    /// Credit limit
    #[arg(long)]
    pub limit: f64,
    /// Purchase APR in percent; 10 is assumed when absent
    #[arg(long)]
    pub apr: Option<f64>,
}

impl From<AddAccountArgs> for AccountSnapshot {
    fn from(val: AddAccountArgs) -> Self {
        AccountSnapshot {
            account_id: val.id,
            user_id: val.user,
            purchase_apr: val.apr,
            current_balance: val.balance,
            credit_limit: val.limit,
        }
    }
}

/// List account snapshots
#[derive(Args)]
pub struct ListAccountsArgs {
    /// Only accounts of this user
    pub user: Option<String>,
}

/// Show one account snapshot
#[derive(Args)]
pub struct ShowAccountArgs {
    pub id: String,
}

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Store or replace an account snapshot
    #[command(alias = "a")]
    Add(AddAccountArgs),
    /// List account snapshots
    #[command(aliases = ["l", "ls"])]
    List(ListAccountsArgs),
    /// Show one account snapshot
    #[command(alias = "s")]
    Show(ShowAccountArgs),
}

// ============================================================================
// Overview commands
// ============================================================================

#[derive(Args)]
pub struct UserArgs {
    /// User whose active plans are summarized
    pub user: String,
}

impl From<UserArgs> for UserId {
    fn from(val: UserArgs) -> Self {
        UserId { user_id: val.user }
    }
}

#[derive(Subcommand)]
pub enum OverviewCommands {
    /// Scheduled payments per month and account for the next twelve months
    #[command(alias = "w")]
    Waterfall(UserArgs),
    /// Share of scheduled payments already made
    #[command(alias = "p")]
    Paid(UserArgs),
    /// Share of positive balances covered by pending payments
    #[command(alias = "c")]
    Coverage(UserArgs),
}

// ============================================================================
// Value enums
// ============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PlanTypeArg {
    /// Pay the highest-APR account first
    MinFees,
    /// Pay the most utilized account first
    OptimCreditScore,
}

impl From<PlanTypeArg> for PlanType {
    fn from(val: PlanTypeArg) -> Self {
        match val {
            PlanTypeArg::MinFees => PlanType::MinFees,
            PlanTypeArg::OptimCreditScore => PlanType::OptimCreditScore,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FrequencyArg {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
}

impl From<FrequencyArg> for PaymentFrequency {
    fn from(val: FrequencyArg) -> Self {
        match val {
            FrequencyArg::Weekly => PaymentFrequency::Weekly,
            FrequencyArg::Biweekly => PaymentFrequency::Biweekly,
            FrequencyArg::Monthly => PaymentFrequency::Monthly,
            FrequencyArg::Quarterly => PaymentFrequency::Quarterly,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PlanStatusArg {
    Current,
    Completed,
    InDefault,
    Cancelled,
}

impl From<PlanStatusArg> for PaymentStatus {
    fn from(val: PlanStatusArg) -> Self {
        match val {
            PlanStatusArg::Current => PaymentStatus::Current,
            PlanStatusArg::Completed => PaymentStatus::Completed,
            PlanStatusArg::InDefault => PaymentStatus::InDefault,
            PlanStatusArg::Cancelled => PaymentStatus::Cancelled,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ActionStatusArg {
    Pending,
    Completed,
    InDefault,
}

impl From<ActionStatusArg> for PaymentActionStatus {
    fn from(val: ActionStatusArg) -> Self {
        match val {
            ActionStatusArg::Pending => PaymentActionStatus::Pending,
            ActionStatusArg::Completed => PaymentActionStatus::Completed,
            ActionStatusArg::InDefault => PaymentActionStatus::InDefault,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => self.create_plans(args).await,
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
            PlanCommands::Update(args) => self.update_plan(&args.into()).await,
            PlanCommands::Action(args) => self.update_action(&args.into()).await,
            PlanCommands::Delete(args) => self.delete_plan(&args.into()).await,
        }
    }

    pub async fn handle_account_command(&self, command: AccountCommands) -> Result<()> {
        match command {
            AccountCommands::Add(args) => {
                let account = self
                    .planner
                    .upsert_account(&args.into())
                    .await
                    .context("Failed to store account")?;
                self.renderer.render(&CreateResult::new(account));
            }
            AccountCommands::List(args) => {
                let accounts = self
                    .planner
                    .list_accounts(args.user.as_deref())
                    .await
                    .context("Failed to list accounts")?;
                self.renderer.render(&Accounts(accounts));
            }
            AccountCommands::Show(args) => {
                let account = self
                    .planner
                    .get_account(&args.id)
                    .await
                    .context("Failed to get account")?
                    .ok_or_else(|| anyhow!("Account '{}' not found", args.id))?;
                self.renderer.render(&account);
            }
        }
        Ok(())
    }

    pub async fn handle_overview_command(&self, command: OverviewCommands) -> Result<()> {
        match command {
            OverviewCommands::Waterfall(args) => {
                let months = self
                    .planner
                    .waterfall(&args.into())
                    .await
                    .context("Failed to compute waterfall")?;
                self.renderer.render(&Waterfall(months));
            }
            OverviewCommands::Paid(args) => {
                let params: UserId = args.into();
                let paid = self
                    .planner
                    .amount_paid_percentage(&params)
                    .await
                    .context("Failed to compute paid percentage")?;
                self.renderer.render(&OperationStatus::success(format!(
                    "{} of scheduled payments made by {}",
                    Percent(paid),
                    params.user_id
                )));
            }
            OverviewCommands::Coverage(args) => {
                let coverage = self
                    .planner
                    .coverage(&args.into())
                    .await
                    .context("Failed to compute coverage")?;
                self.renderer.render(&coverage);
            }
        }
        Ok(())
    }

    async fn create_plans(&self, args: CreatePlansArgs) -> Result<()> {
        let params = CreatePlans {
            tasks: args.read_tasks()?,
            preferences: args.preferences(),
            save: args.save,
        };
        debug!(
            "create_plans: {} task(s), {:?}",
            params.tasks.len(),
            params.preferences
        );

        let plans = self
            .planner
            .create_payment_plans(&params)
            .await
            .context("Failed to create payment plans")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&plans)?);
        } else if args.save {
            for plan in plans {
                self.renderer.render(&CreateResult::new(plan));
            }
        } else {
            self.renderer.render(&PaymentPlans(plans));
        }
        Ok(())
    }

    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let plans = self
            .planner
            .list_plans(params)
            .await
            .context("Failed to list plans")?;
        self.renderer.render(&PaymentPlans(plans));
        Ok(())
    }

    async fn show_plan(&self, params: &Id) -> Result<()> {
        let plan = self
            .planner
            .get_plan(params)
            .await
            .context("Failed to get plan")?
            .ok_or_else(|| anyhow!("Plan with ID {} not found", params.id))?;
        self.renderer.render(&plan);
        Ok(())
    }

    async fn update_plan(&self, params: &UpdatePlan) -> Result<()> {
        let plan = self
            .planner
            .update_plan(params)
            .await
            .context("Failed to update plan")?;
        self.renderer
            .render(&UpdateResult::with_changes(plan, params.changes()));
        Ok(())
    }

    async fn update_action(&self, params: &UpdateAction) -> Result<()> {
        let plan = self
            .planner
            .update_action_status(params)
            .await
            .context("Failed to update payment")?;
        let change = format!("Payment {} marked {}", params.position, params.status);
        self.renderer
            .render(&UpdateResult::with_changes(plan, vec![change]));
        Ok(())
    }

    async fn delete_plan(&self, params: &Id) -> Result<()> {
        let plan = self
            .planner
            .delete_plan(params)
            .await
            .context("Failed to delete plan")?;
        self.renderer.render(&DeleteResult::new(plan));
        Ok(())
    }
}
