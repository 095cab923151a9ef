use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use serverless_benchmarks::adapters::translate::AwsTranslator;
use serverless_benchmarks::config::target_language;
use serverless_benchmarks::glue::translation::handle_translation_event;
use serverless_benchmarks::telemetry;

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();

    let translator = AwsTranslator::from_env().await;
    let target = target_language();

    run(service_fn(move |event: LambdaEvent<Value>| {
        let translator = translator.clone();
        let target = target.clone();
        async move {
            Ok::<_, Error>(handle_translation_event(event.payload, &translator, &target).await)
        }
    }))
    .await
}
