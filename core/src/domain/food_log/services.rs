use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::domain::{
    capture::{entities::CapturedImage, ports::CameraDevice, services::CaptureFlow},
    common::{blocking::run_blocking, entities::app_errors::CoreError, services::Service},
    food_analysis::{
        entities::AnalyzedFood,
        ports::{FoodAnalysisService, LLMClient},
    },
    food_log::{
        ports::FoodLogService,
        value_objects::{LogFoodFromImageInput, LogFoodFromTextInput},
    },
    nutrition::{
        entities::{FoodCategory, FoodItem},
        value_objects::{DailySummary, NewFoodItem},
    },
    store::entities::View,
};

impl<LLM, CAM> Service<LLM, CAM>
where
    LLM: LLMClient,
    CAM: CameraDevice,
{
    async fn commit_analyzed(
        &self,
        food: AnalyzedFood,
        category: FoodCategory,
        thumbnail: Option<String>,
    ) -> FoodItem {
        let item = self
            .store
            .append_food_item(food.into_food_item(category, thumbnail))
            .await;
        self.store.set_view(View::Summary).await;

        info!(item_id = %item.id, name = %item.name, calories = item.macros.calories, "Food logged");
        item
    }
}

fn capture_frame<CAM: CameraDevice>(camera: &CAM) -> Result<CapturedImage, CoreError> {
    let mut flow = CaptureFlow::new(camera);
    flow.start()?;
    flow.capture()
}

impl<LLM, CAM> FoodLogService for Service<LLM, CAM>
where
    LLM: LLMClient,
    CAM: CameraDevice + Clone + 'static,
{
    #[instrument(skip(self, input), fields(category = ?input.category))]
    async fn log_food_from_text(&self, input: LogFoodFromTextInput) -> Result<FoodItem, CoreError> {
        let _busy = self.food_lens_busy.try_acquire()?;

        let food = self.analyze_text(input.description).await?;
        Ok(self.commit_analyzed(food, input.category, None).await)
    }

    #[instrument(skip(self, input), fields(category = ?input.category, bytes = input.image_data.len()))]
    async fn log_food_from_image(
        &self,
        input: LogFoodFromImageInput,
    ) -> Result<FoodItem, CoreError> {
        let _busy = self.food_lens_busy.try_acquire()?;

        let LogFoodFromImageInput {
            image_data,
            category,
        } = input;
        let captured = run_blocking(move || CapturedImage::from_upload(&image_data)).await?;
        let food = self.analyze_image(captured.analysis_jpeg).await?;

        Ok(self
            .commit_analyzed(food, category, Some(captured.thumbnail))
            .await)
    }

    #[instrument(skip(self))]
    async fn scan_and_log(&self, category: FoodCategory) -> Result<FoodItem, CoreError> {
        let _busy = self.food_lens_busy.try_acquire()?;

        let captured = {
            let _camera = self.camera_busy.try_acquire()?;
            let camera = self.camera.clone();
            run_blocking(move || capture_frame(&camera))
                .await
                .inspect_err(|e| {
                    warn!(error = %e, "Scan aborted before analysis");
                })?
        };

        let food = self.analyze_image(captured.analysis_jpeg).await?;
        Ok(self
            .commit_analyzed(food, category, Some(captured.thumbnail))
            .await)
    }

    #[instrument(skip(self, item), fields(name = %item.name))]
    async fn add_food_item(&self, item: NewFoodItem) -> Result<FoodItem, CoreError> {
        let item = self.store.append_food_item(item.into_food_item()?).await;
        info!(item_id = %item.id, "Food entered manually");

        Ok(item)
    }

    async fn get_food_logs(&self) -> Result<Vec<FoodItem>, CoreError> {
        Ok(self.store.food_logs().await)
    }

    async fn daily_summary(&self, date: NaiveDate) -> Result<DailySummary, CoreError> {
        let logs = self.store.food_logs().await;
        Ok(DailySummary::for_date(date, &logs))
    }
}
