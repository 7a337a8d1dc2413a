use soroban_sdk::{
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

pub fn create_native_asset<'a>(
    e: &Env,
    admin: &Address,
) -> (Address, StellarAssetClient<'a>, TokenClient<'a>) {
    let contract_id = e.register_stellar_asset_contract(admin.clone());
    (
        contract_id.clone(),
        StellarAssetClient::new(e, &contract_id),
        TokenClient::new(e, &contract_id),
    )
}
