use std::future::Future;

use chrono::NaiveDate;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_log::value_objects::{LogFoodFromImageInput, LogFoodFromTextInput},
    nutrition::{
        entities::{FoodCategory, FoodItem},
        value_objects::{DailySummary, NewFoodItem},
    },
};

/// The food lens and the daily log.
///
/// Every successful logging call appends exactly one item and switches the
/// current view to the summary.
pub trait FoodLogService: Send + Sync {
    fn log_food_from_text(
        &self,
        input: LogFoodFromTextInput,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn log_food_from_image(
        &self,
        input: LogFoodFromImageInput,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    /// Opens the camera, captures one frame and analyzes it. The camera is
    /// released before the analysis starts.
    fn scan_and_log(
        &self,
        category: FoodCategory,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn add_food_item(
        &self,
        item: NewFoodItem,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn get_food_logs(&self) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    fn daily_summary(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<DailySummary, CoreError>> + Send;
}
