use clap::{Args, Parser, Subcommand, ValueEnum};
use workorder_domain::CompletionFlag;

#[derive(Parser)]
#[command(name = "workorder")]
#[command(about = "Track cabinetry work orders in a CSV file", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to the work order CSV file (or set WORKORDER_FILE env var)
    #[arg(short, long, value_name = "FILE", env = "WORKORDER_FILE", global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new work order file with one room
    Create(CreateArgs),
    /// Show the work order, its rooms and progress
    Show,
    /// Work order header operations
    Order(OrderCommand),
    /// Room operations
    Room(RoomCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub work_order: String,
    #[arg(long)]
    pub project: String,
    #[command(flatten)]
    pub room: RoomFieldArgs,
}

// Order commands
#[derive(Args)]
pub struct OrderCommand {
    #[command(subcommand)]
    pub action: OrderAction,
}

#[derive(Subcommand)]
pub enum OrderAction {
    /// Change the work order number or project name
    Update {
        #[arg(long)]
        work_order: Option<String>,
        #[arg(long)]
        project: Option<String>,
    },
}

// Room commands
#[derive(Args)]
pub struct RoomCommand {
    #[command(subcommand)]
    pub action: RoomAction,
}

#[derive(Subcommand)]
pub enum RoomAction {
    /// Append a room
    Add(RoomAddArgs),
    /// List rooms in file order
    List,
    /// Change text fields of a room
    Update(RoomUpdateArgs),
    /// Flip the nests or labels checkbox of a room
    Toggle {
        #[arg(long)]
        index: usize,
        #[arg(long, value_enum)]
        flag: FlagArg,
    },
    /// Remove a room
    Remove {
        #[arg(long)]
        index: usize,
    },
}

#[derive(Args, Default)]
pub struct RoomFieldArgs {
    #[arg(long = "room-name")]
    pub name: Option<String>,
    #[arg(long = "room-type")]
    pub room_type: Option<String>,
    #[arg(long)]
    pub door_style: Option<String>,
    #[arg(long)]
    pub door_count: Option<String>,
}

#[derive(Args)]
pub struct RoomAddArgs {
    #[command(flatten)]
    pub fields: RoomFieldArgs,
    /// Mark nests as done
    #[arg(long)]
    pub nests: bool,
    /// Mark labels as done
    #[arg(long)]
    pub labels: bool,
}

#[derive(Args)]
pub struct RoomUpdateArgs {
    #[arg(long)]
    pub index: usize,
    #[command(flatten)]
    pub fields: RoomFieldArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FlagArg {
    Nests,
    Labels,
}

impl From<FlagArg> for CompletionFlag {
    fn from(flag: FlagArg) -> Self {
        match flag {
            FlagArg::Nests => CompletionFlag::Nests,
            FlagArg::Labels => CompletionFlag::Labels,
        }
    }
}
