pub mod a001_meal_plan;
