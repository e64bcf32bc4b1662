use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

use crate::application::forms::{
    AssociationForm, BrandForm, BrandUpdateForm, DiscountForm, DiscountUpdateForm,
    OrderLineForm, OrderLineUpdateForm, ProductForm, ProductUpdateForm,
};
use crate::presentation::ViewFormat;

/// Command-line arguments for the vitrine binary.
#[derive(Debug, Parser)]
#[command(
    name = "vitrine",
    version,
    about = "Admin console for the shop backend"
)]
pub struct CliArgs {
    #[command(flatten)]
    pub globals: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command. Each one overrides the matching
/// configuration key.
#[derive(Debug, Args, Default, Clone)]
pub struct GlobalArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "VITRINE_CONFIG_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        global = true
    )]
    pub config_file: Option<PathBuf>,

    /// Override the backend base URL.
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Override the processor-control service URL.
    #[arg(long = "processor-url", value_name = "URL", global = true)]
    pub processor_url: Option<String>,

    /// Override the session token file.
    #[arg(
        long = "token-file",
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        global = true
    )]
    pub token_file: Option<PathBuf>,

    /// Output format for rendered views.
    #[arg(long = "format", value_name = "FORMAT", global = true)]
    pub format: Option<ViewFormat>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,

    /// Always fetch from the backend instead of serving cached views.
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Log in and store the session token.
    Login(LoginArgs),
    /// Forget the stored session token.
    Logout,
    /// Manage products.
    Products(ProductsArgs),
    /// Manage brands.
    Brands(BrandsArgs),
    /// Manage carts and their order lines.
    Carts(CartsArgs),
    /// Manage discounts and their associations.
    Discounts(DiscountsArgs),
    /// Control the background order processor.
    Processor(ProcessorArgs),
    /// Start an interactive session.
    Console,
}

#[derive(Debug, Args, Clone)]
pub struct LoginArgs {
    #[arg(long, value_name = "NAME")]
    pub username: String,

    /// Read the password from a file.
    #[arg(
        long = "password-file",
        env = "VITRINE_PASSWORD_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        conflicts_with = "password"
    )]
    pub password_file: Option<PathBuf>,

    #[arg(long, env = "VITRINE_PASSWORD", hide_env_values = true, hide = true)]
    pub password: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct IdArg {
    #[arg(value_name = "ID")]
    pub id: i32,
}

#[derive(Debug, Args, Clone)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Debug, Subcommand, Clone)]
pub enum ProductsCommand {
    /// List products.
    List,
    /// Show a single product.
    Show(IdArg),
    /// Create a product.
    Create(ProductForm),
    /// Update fields of an existing product.
    Update(ProductUpdateForm),
    /// Delete a product.
    Delete(IdArg),
}

#[derive(Debug, Args, Clone)]
pub struct BrandsArgs {
    #[command(subcommand)]
    pub command: BrandsCommand,
}

#[derive(Debug, Subcommand, Clone)]
pub enum BrandsCommand {
    /// List brands.
    List,
    /// Show a single brand.
    Show(IdArg),
    /// Create a brand.
    Create(BrandForm),
    /// Update fields of an existing brand.
    Update(BrandUpdateForm),
    /// Delete a brand.
    Delete(IdArg),
}

#[derive(Debug, Args, Clone)]
pub struct CartsArgs {
    #[command(subcommand)]
    pub command: CartsCommand,
}

#[derive(Debug, Subcommand, Clone)]
pub enum CartsCommand {
    /// List carts with their order lines.
    List,
    /// Show a single cart.
    Show(IdArg),
    /// Create an empty cart.
    Create,
    /// Delete a cart.
    Delete(IdArg),
    /// Add an order line to a cart.
    #[command(name = "add-line")]
    AddLine(OrderLineForm),
    /// Replace an order line.
    #[command(name = "update-line")]
    UpdateLine(OrderLineUpdateForm),
    /// Remove an order line.
    #[command(name = "remove-line")]
    RemoveLine(IdArg),
}

#[derive(Debug, Args, Clone)]
pub struct DiscountsArgs {
    #[command(subcommand)]
    pub command: DiscountsCommand,
}

#[derive(Debug, Subcommand, Clone)]
pub enum DiscountsCommand {
    /// List discounts.
    List,
    /// Show a single discount.
    Show(IdArg),
    /// Create a discount.
    Create(DiscountForm),
    /// Update fields of an existing discount.
    Update(DiscountUpdateForm),
    /// Delete a discount.
    Delete(IdArg),
    /// Attach a discount to a category, brand or product.
    Associate(AssociationForm),
}

#[derive(Debug, Args, Clone)]
pub struct ProcessorArgs {
    #[command(subcommand)]
    pub command: ProcessorCommand,
}

#[derive(Debug, Subcommand, Clone)]
pub enum ProcessorCommand {
    /// Pause order processing.
    Pause,
    /// Resume order processing.
    Start,
}
