mod calorie_form;

pub use calorie_form::CalorieFormScreen;
