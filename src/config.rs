//! Carga el estado inicial de la cafetera y sus recetas desde un archivo json
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::{
    coffee_machine::CoffeeMachine,
    constants::{
        DEFAULT_CONFIG_FILE, INITIAL_COFFEE_BEANS, INITIAL_DISPOSABLE_CUPS, INITIAL_MILK,
        INITIAL_MONEY, INITIAL_WATER,
    },
    errors::CoffeeMachineError,
    ingredients::IngredientQuantities,
    recipe::{Recipe, RecipeCatalog},
};

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct JsonRecipe {
    name: String,
    #[serde(default)]
    water: u64,
    #[serde(default)]
    milk: u64,
    #[serde(default)]
    coffee_beans: u64,
    price: u64,
}

#[derive(Deserialize, Debug)]
#[serde(default, deny_unknown_fields)]
struct JsonMachine {
    water: u64,
    milk: u64,
    coffee_beans: u64,
    disposable_cups: u64,
    money: u64,
    recipes: Option<Vec<JsonRecipe>>,
}

impl Default for JsonMachine {
    fn default() -> Self {
        JsonMachine {
            water: INITIAL_WATER,
            milk: INITIAL_MILK,
            coffee_beans: INITIAL_COFFEE_BEANS,
            disposable_cups: INITIAL_DISPOSABLE_CUPS,
            money: INITIAL_MONEY,
            recipes: None,
        }
    }
}

/// Todo lo que necesita el menu para arrancar
#[derive(Debug, Default)]
pub struct MachineConfig {
    pub machine: CoffeeMachine,
    pub catalog: RecipeCatalog,
}

impl MachineConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<MachineConfig, CoffeeMachineError> {
        let json: JsonMachine = serde_json::from_reader(reader)
            .map_err(|err| CoffeeMachineError::ConfigReaderError(err.to_string()))?;

        let catalog = match json.recipes {
            Some(recipes) => RecipeCatalog::new(
                recipes
                    .into_iter()
                    .map(|recipe| {
                        let required = IngredientQuantities::new(
                            recipe.water,
                            recipe.milk,
                            recipe.coffee_beans,
                        );
                        Recipe::new(&recipe.name, required, recipe.price)
                    })
                    .collect(),
            )?,
            None => RecipeCatalog::default(),
        };
        let machine = CoffeeMachine::new(
            IngredientQuantities::new(json.water, json.milk, json.coffee_beans),
            json.disposable_cups,
            json.money,
        );
        debug!("[CONFIG] Loaded {} recipes", catalog.len());
        Ok(MachineConfig { machine, catalog })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<MachineConfig, CoffeeMachineError> {
        let file = File::open(&path).map_err(|err| {
            CoffeeMachineError::ConfigReaderError(format!(
                "{}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        MachineConfig::from_reader(BufReader::new(file))
    }

    /// Si se indica una ruta, el archivo tiene que existir. Si no, se usa el archivo
    /// por defecto cuando existe, o la cafetera incorporada.
    pub fn load(path: Option<&str>) -> Result<MachineConfig, CoffeeMachineError> {
        if let Some(path) = path {
            info!("[CONFIG] Reading configuration from {}", path);
            return MachineConfig::from_file(path);
        }
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            info!("[CONFIG] Reading configuration from {}", DEFAULT_CONFIG_FILE);
            return MachineConfig::from_file(DEFAULT_CONFIG_FILE);
        }
        warn!(
            "[CONFIG] {} not found, using the built-in machine",
            DEFAULT_CONFIG_FILE
        );
        Ok(MachineConfig::default())
    }
}
