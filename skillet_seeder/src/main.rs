//! A CLI utility that fills a (fresh) database with sample users,
//! categories, and recipes, making local frontend and API development
//! possible without hand-writing rows.
//!
//! The data goes through the same validation and mutation layer the rest
//! of the backend uses, so a seeded database is indistinguishable from
//! an organically grown one.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use miette::{bail, miette, Context, IntoDiagnostic, Result};
use skillet::connect_and_set_up_database;
use skillet_configuration::Configuration;
use skillet_core::ids::{CategoryId, UserId};
use skillet_database::entities::category::{CategoryMutation, NewCategory};
use skillet_database::entities::recipe::{NewRecipe, RecipeMutation, RecipeQuery};
use skillet_database::entities::user::{NewUser, UserMutation};
use sqlx::SqliteConnection;
use tracing::info;

use crate::sample_data::{SAMPLE_CATEGORIES, SAMPLE_RECIPES, SAMPLE_USERS};

mod sample_data;


#[derive(Parser)]
#[command(
    name = "skillet-seeder",
    author,
    about = "Fills a fresh Skillet database with sample data for local development.",
    version
)]
struct CLIArgs {
    #[arg(
        short = 'c',
        long = "configurationFilePath",
        help = "Path to the configuration file to use. Defaults to ./data/configuration.toml"
    )]
    configuration_file_path: Option<PathBuf>,
}


async fn seed_sample_data(database_connection: &mut SqliteConnection) -> Result<()> {
    let mut author_ids: HashMap<&'static str, UserId> = HashMap::new();

    for sample_user in SAMPLE_USERS {
        let new_user = NewUser {
            username: sample_user.username.to_string(),
            display_name: sample_user.display_name.to_string(),
        }
        .validated()
        .into_diagnostic()?;

        let created_user = UserMutation::create(database_connection, new_user)
            .await
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to insert sample user {}.", sample_user.username))?;

        author_ids.insert(sample_user.username, created_user.id);
    }


    let mut category_ids: HashMap<&'static str, CategoryId> = HashMap::new();

    for sample_category_name in SAMPLE_CATEGORIES {
        let new_category = NewCategory {
            name: sample_category_name.to_string(),
        }
        .validated()
        .into_diagnostic()?;

        let created_category = CategoryMutation::create(database_connection, new_category)
            .await
            .into_diagnostic()
            .wrap_err_with(|| {
                format!(
                    "Failed to insert sample category {}.",
                    sample_category_name
                )
            })?;

        category_ids.insert(sample_category_name, created_category.id);
    }


    for sample_recipe in SAMPLE_RECIPES {
        let author_id = *author_ids.get(sample_recipe.author_username).ok_or_else(|| {
            miette!(
                "Sample recipe {} references unknown author {}.",
                sample_recipe.slug,
                sample_recipe.author_username
            )
        })?;

        let category_id = match sample_recipe.category_name {
            Some(category_name) => Some(*category_ids.get(category_name).ok_or_else(|| {
                miette!(
                    "Sample recipe {} references unknown category {}.",
                    sample_recipe.slug,
                    category_name
                )
            })?),
            None => None,
        };

        let new_recipe = NewRecipe {
            title: sample_recipe.title.to_string(),
            description: sample_recipe.description.to_string(),
            slug: sample_recipe.slug.to_string(),
            preparation_time: sample_recipe.preparation_time,
            preparation_time_unit: sample_recipe.preparation_time_unit.to_string(),
            servings: sample_recipe.servings,
            servings_unit: sample_recipe.servings_unit.to_string(),
            preparation_steps: sample_recipe.preparation_steps.to_string(),
            preparation_steps_is_html: false,
            is_published: sample_recipe.is_published,
            author_id,
            category_id,
        }
        .validated()
        .into_diagnostic()?;

        RecipeMutation::create(database_connection, new_recipe)
            .await
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to insert sample recipe {}.", sample_recipe.slug))?;
    }


    info!(
        users = SAMPLE_USERS.len(),
        categories = SAMPLE_CATEGORIES.len(),
        recipes = SAMPLE_RECIPES.len(),
        "Sample data inserted."
    );

    Ok(())
}


#[tokio::main]
async fn main() -> Result<()> {
    let arguments = CLIArgs::parse();

    let configuration = match arguments.configuration_file_path.as_ref() {
        Some(path) => {
            println!("Loading configuration: {}.", path.display());
            Configuration::load_from_path(path)
        }
        None => {
            println!("Loading configuration at default path.");
            Configuration::load_from_default_path()
        }
    }
    .into_diagnostic()
    .wrap_err("Failed to load configuration file.")?;

    tracing_subscriber::fmt()
        .with_env_filter(configuration.logging.console_output_level_filter())
        .init();


    configuration
        .base_paths
        .create_base_data_directory_if_missing()
        .into_diagnostic()
        .wrap_err("Failed to create the base data directory.")?;

    let database_pool = connect_and_set_up_database(&configuration).await?;

    let mut database_connection = database_pool
        .acquire()
        .await
        .into_diagnostic()
        .wrap_err("Failed to acquire database connection.")?;


    let any_recipes_exist = RecipeQuery::any_exist(&mut database_connection)
        .await
        .into_diagnostic()?;

    if any_recipes_exist {
        bail!("Refusing to seed: the database already contains recipes.");
    }

    seed_sample_data(&mut database_connection).await?;

    Ok(())
}
