//! Parametros de configuracion de la cafetera

/// Cantidad inicial de agua, en ml
pub const INITIAL_WATER: u64 = 400;

/// Cantidad inicial de leche, en ml
pub const INITIAL_MILK: u64 = 540;

/// Cantidad inicial de granos de cafe, en g
pub const INITIAL_COFFEE_BEANS: u64 = 120;

/// Cantidad inicial de vasos descartables
pub const INITIAL_DISPOSABLE_CUPS: u64 = 9;

/// Dinero con el que arranca la cafetera
pub const INITIAL_MONEY: u64 = 550;

/// Archivo de configuracion que se busca en el directorio actual si no se indica una ruta
pub const DEFAULT_CONFIG_FILE: &str = "coffee_machine.json";

pub const MAIN_PROMPT: &str = "Write action (buy, fill, take, remaining, exit): ";

pub const BACK_TOKEN: &str = "back";

pub const WATER_PROMPT: &str = "Write how many ml of water you want to add: ";
pub const MILK_PROMPT: &str = "Write how many ml of milk you want to add: ";
pub const COFFEE_BEANS_PROMPT: &str = "Write how many grams of coffee beans you want to add: ";
pub const CUPS_PROMPT: &str = "Write how many disposable cups you want to add: ";

pub const MAKING_COFFEE: &str = "I have enough resources, making you a coffee!";
