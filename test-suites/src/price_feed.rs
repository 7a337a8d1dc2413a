use soroban_sdk::{Address, Env};

pub use mock_price_feed::MockPriceFeedClient;
use mock_price_feed::MockPriceFeed;

pub fn create_mock_price_feed<'a>(e: &Env) -> (Address, MockPriceFeedClient<'a>) {
    let contract_id = e.register_contract(None, MockPriceFeed {});
    (
        contract_id.clone(),
        MockPriceFeedClient::new(e, &contract_id),
    )
}
