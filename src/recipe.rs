//! Bebidas que sabe preparar la cafetera
use std::fmt;

use crate::{errors::CoffeeMachineError, ingredients::IngredientQuantities};

/// Recursos que pueden faltar en una venta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Water,
    Milk,
    CoffeeBeans,
    DisposableCups,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Resource::Water => "water",
            Resource::Milk => "milk",
            Resource::CoffeeBeans => "coffee beans",
            Resource::DisposableCups => "disposable cup",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub required: IngredientQuantities,
    pub price: u64,
}

impl Recipe {
    pub fn new(name: &str, required: IngredientQuantities, price: u64) -> Recipe {
        Recipe {
            name: name.to_string(),
            required,
            price,
        }
    }

    /// 250 ml de agua y 16 g de granos de cafe, $4
    pub fn espresso() -> Recipe {
        Recipe::new("espresso", IngredientQuantities::new(250, 0, 16), 4)
    }

    /// 350 ml de agua, 75 ml de leche y 20 g de granos de cafe, $7
    pub fn latte() -> Recipe {
        Recipe::new("latte", IngredientQuantities::new(350, 75, 20), 7)
    }

    /// 200 ml de agua, 100 ml de leche y 12 g de granos de cafe, $6
    pub fn cappuccino() -> Recipe {
        Recipe::new("cappuccino", IngredientQuantities::new(200, 100, 12), 6)
    }
}

/// Lista ordenada e inmutable de recetas. El operador las elige con un indice que arranca en 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Result<RecipeCatalog, CoffeeMachineError> {
        if recipes.is_empty() {
            return Err(CoffeeMachineError::ConfigReaderError(
                "the recipe catalog is empty".to_string(),
            ));
        }
        Ok(RecipeCatalog { recipes })
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name == name)
    }

    /// Interpreta el selector tal como lo escribe el operador, empezando en 1
    pub fn by_selector(&self, selector: &str) -> Result<&Recipe, CoffeeMachineError> {
        let invalid = || CoffeeMachineError::InvalidSelector(selector.to_string());
        let position = selector.parse::<usize>().map_err(|_| invalid())?;
        position
            .checked_sub(1)
            .and_then(|index| self.get(index))
            .ok_or_else(invalid)
    }

    /// "1 - espresso, 2 - latte, 3 - cappuccino"
    pub fn menu_options(&self) -> String {
        self.recipes
            .iter()
            .enumerate()
            .map(|(index, recipe)| format!("{} - {}", index + 1, recipe.name))
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        RecipeCatalog {
            recipes: vec![Recipe::espresso(), Recipe::latte(), Recipe::cappuccino()],
        }
    }
}
