//! Maps parsed commands onto controller operations.

use tokio::fs;

use crate::{
    application::{controller::ViewController, error::AppError},
    cache::ResourceType,
    config::{
        BrandsCommand, CartsCommand, Command, DiscountsCommand, LoginArgs, ProcessorCommand,
        ProductsCommand,
    },
    infra::error::InfraError,
};

/// Run one command and return what should be printed.
///
/// `console` is handled by the caller; it is rejected here.
pub async fn dispatch(controller: &mut ViewController, command: Command) -> Result<String, AppError> {
    let output = match command {
        Command::Login(args) => {
            let password = resolve_password(&args).await?;
            controller.login(&args.username, &password).await?
        }
        Command::Logout => controller.logout().await?,
        Command::Products(args) => match args.command {
            ProductsCommand::List => controller.show(ResourceType::Products).await?,
            ProductsCommand::Show(arg) => controller.find(ResourceType::Products, arg.id).await?,
            ProductsCommand::Create(form) => controller.create_product(form).await?,
            ProductsCommand::Update(form) => controller.update_product(form).await?,
            ProductsCommand::Delete(arg) => controller.delete_product(arg.id).await?,
        },
        Command::Brands(args) => match args.command {
            BrandsCommand::List => controller.show(ResourceType::Brands).await?,
            BrandsCommand::Show(arg) => controller.find(ResourceType::Brands, arg.id).await?,
            BrandsCommand::Create(form) => controller.create_brand(form).await?,
            BrandsCommand::Update(form) => controller.update_brand(form).await?,
            BrandsCommand::Delete(arg) => controller.delete_brand(arg.id).await?,
        },
        Command::Carts(args) => match args.command {
            CartsCommand::List => controller.show(ResourceType::Carts).await?,
            CartsCommand::Show(arg) => controller.find(ResourceType::Carts, arg.id).await?,
            CartsCommand::Create => controller.create_cart().await?,
            CartsCommand::Delete(arg) => controller.delete_cart(arg.id).await?,
            CartsCommand::AddLine(form) => controller.add_order_line(form).await?,
            CartsCommand::UpdateLine(form) => controller.update_order_line(form).await?,
            CartsCommand::RemoveLine(arg) => controller.remove_order_line(arg.id).await?,
        },
        Command::Discounts(args) => match args.command {
            DiscountsCommand::List => controller.show(ResourceType::Discounts).await?,
            DiscountsCommand::Show(arg) => controller.find(ResourceType::Discounts, arg.id).await?,
            DiscountsCommand::Create(form) => controller.create_discount(form).await?,
            DiscountsCommand::Update(form) => controller.update_discount(form).await?,
            DiscountsCommand::Delete(arg) => controller.delete_discount(arg.id).await?,
            DiscountsCommand::Associate(form) => controller.associate_discount(form).await?,
        },
        Command::Processor(args) => match args.command {
            ProcessorCommand::Pause => controller.pause_processor().await?,
            ProcessorCommand::Start => controller.start_processor().await?,
        },
        Command::Console => {
            return Err(AppError::validation("already in a console session"));
        }
    };
    Ok(output)
}

async fn resolve_password(args: &LoginArgs) -> Result<String, AppError> {
    if let Some(path) = args.password_file.as_ref() {
        let contents = fs::read_to_string(path).await.map_err(InfraError::from)?;
        return Ok(contents.trim_end_matches(['\r', '\n']).to_string());
    }
    args.password.clone().ok_or_else(|| {
        AppError::validation("a password is required: pass --password-file or set VITRINE_PASSWORD")
    })
}
