//! Custody tests: deposits, liquidity checks and payouts.
//!
//! Vault holdings are never tracked by the contract itself, so every
//! assertion here reads the bank module or the cw20 contract directly.

use cosmwasm_std::{coin, coins, to_json_binary, Addr, Empty, Uint128};
use cw20::{Cw20Coin, Cw20ExecuteMsg, Cw20ReceiveMsg};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use common::AssetInfo;
use vault::msg::{
    ExecuteMsg, HeldBalanceResponse, InstantiateMsg, LiquidityResponse, QueryMsg, ReceiveMsg,
};
use vault::state::Hardening;
use vault::ContractError;

// ============================================================================
// Test Setup
// ============================================================================

const FOREIGN_TKN: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
const FOREIGN_TKN_ALT: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";

fn contract_vault() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        vault::contract::execute,
        vault::contract::instantiate,
        vault::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

struct Suite {
    app: App,
    vault: Addr,
    token: Addr,
    admin: Addr,
    node_manager: Addr,
    user: Addr,
}

fn setup() -> Suite {
    setup_with(None)
}

fn setup_with(hardening: Option<Hardening>) -> Suite {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let node_manager = Addr::unchecked("terra1nodemanager");
    let user = Addr::unchecked("terra1user");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(
                storage,
                &user,
                vec![coin(10_000_000, "uluna"), coin(10_000_000, "uusd")],
            )
            .unwrap();
    });

    let vault_code_id = app.store_code(contract_vault());
    let vault = app
        .instantiate_contract(
            vault_code_id,
            admin.clone(),
            &InstantiateMsg {
                node_manager: Some(node_manager.to_string()),
                hardening,
            },
            &[],
            "fooswap-vault",
            None,
        )
        .unwrap();

    let cw20_code_id = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_code_id,
            admin.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "FooSwap Token".to_string(),
                symbol: "TKN".to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: user.to_string(),
                    amount: Uint128::from(10_000_000u128),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "cw20-tkn",
            None,
        )
        .unwrap();

    Suite {
        app,
        vault,
        token,
        admin,
        node_manager,
        user,
    }
}

impl Suite {
    fn approve(&mut self, amount: u128) {
        self.app
            .execute_contract(
                self.user.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.vault.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    fn deposit_token(&mut self, amount: u128) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            self.user.clone(),
            self.vault.clone(),
            &ExecuteMsg::DepositToken {
                token: self.token.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    fn register_token(&mut self, foreign_token: &str, local_token: AssetInfo) {
        self.app
            .execute_contract(
                self.admin.clone(),
                self.vault.clone(),
                &ExecuteMsg::RegisterToken {
                    foreign_token: foreign_token.to_string(),
                    local_token,
                },
                &[],
            )
            .unwrap();
    }

    fn send_via_token(&mut self, amount: u128) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            self.user.clone(),
            self.token.clone(),
            &Cw20ExecuteMsg::Send {
                contract: self.vault.to_string(),
                amount: Uint128::new(amount),
                msg: to_json_binary(&ReceiveMsg::Deposit {}).unwrap(),
            },
            &[],
        )
    }

    fn send_token(
        &mut self,
        sender: &Addr,
        recipient: &str,
        asset: AssetInfo,
        amount: u128,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.vault.clone(),
            &ExecuteMsg::SendToken {
                recipient: recipient.to_string(),
                asset,
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    fn token_asset(&self) -> AssetInfo {
        AssetInfo::cw20(self.token.clone())
    }

    fn cw20_balance(&self, owner: &Addr) -> Uint128 {
        self.app
            .wrap()
            .query_wasm_smart::<cw20::BalanceResponse>(
                &self.token,
                &cw20::Cw20QueryMsg::Balance {
                    address: owner.to_string(),
                },
            )
            .unwrap()
            .balance
    }

    fn bank_balance(&self, owner: &Addr, denom: &str) -> Uint128 {
        self.app.wrap().query_balance(owner, denom).unwrap().amount
    }

    fn held(&self, asset: AssetInfo) -> Uint128 {
        let res: HeldBalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.vault, &QueryMsg::Balance { asset })
            .unwrap();
        res.amount
    }

    fn liquidity(&self, asset: AssetInfo, amount: u128) -> bool {
        let res: LiquidityResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.vault,
                &QueryMsg::CheckLiquidity {
                    asset,
                    amount: Uint128::new(amount),
                },
            )
            .unwrap();
        res.sufficient
    }
}

fn contract_error(err: anyhow::Error) -> ContractError {
    err.downcast::<ContractError>()
        .expect("error should be a vault ContractError")
}

fn has_event(res: &AppResponse, event: &str) -> bool {
    let ty = format!("wasm-{event}");
    res.events.iter().any(|e| e.ty == ty)
}

// ============================================================================
// Token Deposits
// ============================================================================

#[test]
fn test_deposit_token_pulls_exact_amount() {
    let mut suite = setup();
    suite.approve(3_000_000);

    let res = suite.deposit_token(2_000_000).unwrap();

    assert_eq!(suite.cw20_balance(&suite.vault), Uint128::new(2_000_000));
    assert_eq!(suite.cw20_balance(&suite.user), Uint128::new(8_000_000));
    assert_eq!(suite.held(suite.token_asset()), Uint128::new(2_000_000));
    // No deposit event in the default configuration
    assert!(!has_event(&res, "vault_deposit"));
}

#[test]
fn test_deposit_token_without_allowance_fails() {
    let mut suite = setup();

    let err = suite.deposit_token(1_000).unwrap_err();

    assert!(matches!(
        contract_error(err),
        ContractError::TransferFailed { .. }
    ));
    assert_eq!(suite.cw20_balance(&suite.vault), Uint128::zero());
    assert_eq!(suite.cw20_balance(&suite.user), Uint128::new(10_000_000));
}

#[test]
fn test_deposit_token_beyond_allowance_fails() {
    let mut suite = setup();
    suite.approve(500);

    let err = suite.deposit_token(501).unwrap_err();

    assert!(matches!(
        contract_error(err),
        ContractError::TransferFailed { .. }
    ));
    assert_eq!(suite.cw20_balance(&suite.vault), Uint128::zero());
}

#[test]
fn test_deposit_token_beyond_depositor_balance_fails() {
    let mut suite = setup();
    suite.approve(20_000_000);

    let err = suite.deposit_token(10_000_001).unwrap_err();

    assert!(matches!(
        contract_error(err),
        ContractError::TransferFailed { .. }
    ));
    assert_eq!(suite.cw20_balance(&suite.vault), Uint128::zero());
    assert_eq!(suite.cw20_balance(&suite.user), Uint128::new(10_000_000));
}

#[test]
fn test_deposit_token_from_unknown_contract_fails() {
    let mut suite = setup();

    let err = suite
        .app
        .execute_contract(
            suite.user.clone(),
            suite.vault.clone(),
            &ExecuteMsg::DepositToken {
                token: "terra1notatoken".to_string(),
                amount: Uint128::new(1),
            },
            &[],
        )
        .unwrap_err();

    assert!(matches!(
        contract_error(err),
        ContractError::TransferFailed { .. }
    ));
}

#[test]
fn test_deposit_token_rejects_zero_amount() {
    let mut suite = setup();
    suite.approve(1_000);

    let err = suite.deposit_token(0).unwrap_err();

    assert!(matches!(
        contract_error(err),
        ContractError::InvalidAmount { .. }
    ));
}

#[test]
fn test_receive_deposit_via_cw20_send() {
    let mut suite = setup();
    let token = suite.token_asset();
    suite.register_token(FOREIGN_TKN, token);

    suite.send_via_token(750_000).unwrap();

    assert_eq!(suite.held(suite.token_asset()), Uint128::new(750_000));
    assert!(suite.liquidity(suite.token_asset(), 750_000));
    assert!(!suite.liquidity(suite.token_asset(), 750_001));
}

#[test]
fn test_receive_from_unregistered_token_fails() {
    let mut suite = setup();

    let err = suite.send_via_token(750_000).unwrap_err();

    assert_eq!(
        contract_error(err),
        ContractError::TokenNotSupported {
            token: suite.token.to_string()
        }
    );
    assert_eq!(suite.cw20_balance(&suite.vault), Uint128::zero());
    assert_eq!(suite.cw20_balance(&suite.user), Uint128::new(10_000_000));
}

#[test]
fn test_receive_called_directly_by_account_fails() {
    let mut suite = setup_with(Some(Hardening {
        reject_zero_amounts: true,
        emit_deposit_events: true,
    }));
    let token = suite.token_asset();
    suite.register_token(FOREIGN_TKN, token);
    let attacker = Addr::unchecked("terra1attacker");

    let res = suite.app.execute_contract(
        attacker.clone(),
        suite.vault.clone(),
        &ExecuteMsg::Receive(Cw20ReceiveMsg {
            sender: attacker.to_string(),
            amount: Uint128::new(1_000_000_000),
            msg: to_json_binary(&ReceiveMsg::Deposit {}).unwrap(),
        }),
        &[],
    );

    let err = res.unwrap_err();
    assert_eq!(
        contract_error(err),
        ContractError::TokenNotSupported {
            token: attacker.to_string()
        }
    );
    assert_eq!(suite.held(suite.token_asset()), Uint128::zero());
}

#[test]
fn test_receive_stops_after_token_is_remapped() {
    let mut suite = setup();
    let token = suite.token_asset();
    suite.register_token(FOREIGN_TKN, token.clone());
    suite.register_token(FOREIGN_TKN_ALT, token);
    suite.send_via_token(100).unwrap();

    // One foreign id moves away, the other still maps the token
    suite.register_token(FOREIGN_TKN, AssetInfo::native("uluna"));
    suite.send_via_token(100).unwrap();

    suite.register_token(FOREIGN_TKN_ALT, AssetInfo::native("uusd"));
    let err = suite.send_via_token(100).unwrap_err();

    assert!(matches!(
        contract_error(err),
        ContractError::TokenNotSupported { .. }
    ));
    assert_eq!(suite.held(suite.token_asset()), Uint128::new(200));
}

// ============================================================================
// Native Deposits
// ============================================================================

#[test]
fn test_deposit_native_accumulates() {
    let mut suite = setup();

    for amount in [1_000_000u128, 500_000] {
        suite
            .app
            .execute_contract(
                suite.user.clone(),
                suite.vault.clone(),
                &ExecuteMsg::DepositNative {},
                &coins(amount, "uluna"),
            )
            .unwrap();
    }

    assert_eq!(
        suite.bank_balance(&suite.vault, "uluna"),
        Uint128::new(1_500_000)
    );
    assert_eq!(
        suite.held(AssetInfo::native("uluna")),
        Uint128::new(1_500_000)
    );
}

#[test]
fn test_deposit_native_requires_funds() {
    let mut suite = setup();

    let err = suite
        .app
        .execute_contract(
            suite.user.clone(),
            suite.vault.clone(),
            &ExecuteMsg::DepositNative {},
            &[],
        )
        .unwrap_err();

    assert_eq!(contract_error(err), ContractError::NoFundsSent);
}

#[test]
fn test_deposit_native_rejects_multiple_denoms() {
    let mut suite = setup();

    let err = suite
        .app
        .execute_contract(
            suite.user.clone(),
            suite.vault.clone(),
            &ExecuteMsg::DepositNative {},
            &[coin(100, "uluna"), coin(100, "uusd")],
        )
        .unwrap_err();

    assert!(matches!(
        contract_error(err),
        ContractError::InvalidAmount { .. }
    ));
    // The whole transaction reverted, including the attached funds
    assert_eq!(suite.bank_balance(&suite.vault, "uluna"), Uint128::zero());
    assert_eq!(suite.bank_balance(&suite.vault, "uusd"), Uint128::zero());
}

#[test]
fn test_direct_bank_send_counts_as_custody() {
    let mut suite = setup();

    suite
        .app
        .send_tokens(suite.user.clone(), suite.vault.clone(), &coins(400, "uusd"))
        .unwrap();

    assert!(suite.liquidity(AssetInfo::native("uusd"), 400));
    assert!(!suite.liquidity(AssetInfo::native("uusd"), 401));
}

#[test]
fn test_deposit_events_when_enabled() {
    let mut suite = setup_with(Some(Hardening {
        reject_zero_amounts: true,
        emit_deposit_events: true,
    }));

    let res = suite
        .app
        .execute_contract(
            suite.user.clone(),
            suite.vault.clone(),
            &ExecuteMsg::DepositNative {},
            &coins(1_234, "uluna"),
        )
        .unwrap();

    let event = res
        .events
        .iter()
        .find(|e| e.ty == "wasm-vault_deposit")
        .expect("vault_deposit event");
    let attr = |key: &str| {
        event
            .attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.clone())
    };
    assert_eq!(attr("depositor"), Some(suite.user.to_string()));
    assert_eq!(attr("asset"), Some("uluna".to_string()));
    assert_eq!(attr("amount"), Some("1234".to_string()));
}

// ============================================================================
// Liquidity Check
// ============================================================================

#[test]
fn test_check_liquidity_boundaries() {
    let mut suite = setup();
    suite.approve(1_000);
    suite.deposit_token(1_000).unwrap();

    let asset = suite.token_asset();
    assert!(suite.liquidity(asset.clone(), 0));
    assert!(suite.liquidity(asset.clone(), 999));
    assert!(suite.liquidity(asset.clone(), 1_000));
    assert!(!suite.liquidity(asset, 1_001));
}

#[test]
fn test_check_liquidity_unknown_assets_report_zero() {
    let suite = setup();

    let unknown = [
        AssetInfo::native("uunknown"),
        AssetInfo::cw20("terra1notatoken"),
        AssetInfo::cw20(""),
        AssetInfo::native(""),
        // Known token the vault has never received
        suite.token_asset(),
    ];

    for asset in unknown {
        let res: LiquidityResponse = suite
            .app
            .wrap()
            .query_wasm_smart(
                &suite.vault,
                &QueryMsg::CheckLiquidity {
                    asset: asset.clone(),
                    amount: Uint128::new(1),
                },
            )
            .unwrap();
        assert!(!res.sufficient, "{asset} should be insufficient");
        assert_eq!(res.held, Uint128::zero());

        assert!(suite.liquidity(asset, 0));
    }
}

// ============================================================================
// Payout
// ============================================================================

#[test]
fn test_send_token_drains_exact_custody() {
    let mut suite = setup();
    let bob = Addr::unchecked("terra1bob");
    let admin = suite.admin.clone();
    suite.approve(2_000);
    suite.deposit_token(2_000).unwrap();

    suite
        .send_token(&admin, bob.as_str(), suite.token_asset(), 2_000)
        .unwrap();
    assert_eq!(suite.cw20_balance(&suite.vault), Uint128::zero());
    assert_eq!(suite.cw20_balance(&bob), Uint128::new(2_000));

    let err = suite
        .send_token(&admin, bob.as_str(), suite.token_asset(), 1)
        .unwrap_err();
    assert_eq!(
        contract_error(err),
        ContractError::InsufficientBalance {
            asset: suite.token.to_string(),
            held: Uint128::zero(),
            requested: Uint128::new(1),
        }
    );
}

#[test]
fn test_send_native_respects_balance() {
    let mut suite = setup();
    let bob = Addr::unchecked("terra1bob");
    let admin = suite.admin.clone();

    suite
        .app
        .execute_contract(
            suite.user.clone(),
            suite.vault.clone(),
            &ExecuteMsg::DepositNative {},
            &coins(1_000, "uluna"),
        )
        .unwrap();

    let err = suite
        .send_token(&admin, bob.as_str(), AssetInfo::native("uluna"), 1_001)
        .unwrap_err();
    assert_eq!(
        contract_error(err),
        ContractError::InsufficientBalance {
            asset: "uluna".to_string(),
            held: Uint128::new(1_000),
            requested: Uint128::new(1_001),
        }
    );
    assert_eq!(suite.bank_balance(&suite.vault, "uluna"), Uint128::new(1_000));

    let res = suite
        .send_token(&admin, bob.as_str(), AssetInfo::native("uluna"), 600)
        .unwrap();
    assert!(has_event(&res, "generic_token_sent"));
    assert_eq!(suite.bank_balance(&bob, "uluna"), Uint128::new(600));
    assert_eq!(suite.bank_balance(&suite.vault, "uluna"), Uint128::new(400));
}

#[test]
fn test_send_token_rejects_non_administrator() {
    let mut suite = setup();
    let user = suite.user.clone();
    let node_manager = suite.node_manager.clone();
    suite.approve(1_000);
    suite.deposit_token(1_000).unwrap();

    for caller in [user, node_manager] {
        let err = suite
            .send_token(&caller, caller.as_str(), suite.token_asset(), 500)
            .unwrap_err();
        assert_eq!(contract_error(err), ContractError::Unauthorized);
    }

    assert_eq!(suite.cw20_balance(&suite.vault), Uint128::new(1_000));
}

#[test]
fn test_send_token_rejects_null_recipient() {
    let mut suite = setup();
    let admin = suite.admin.clone();
    suite.approve(1_000);
    suite.deposit_token(1_000).unwrap();

    let err = suite
        .send_token(&admin, "", suite.token_asset(), 1)
        .unwrap_err();

    match contract_error(err) {
        ContractError::InvalidAddress { reason } => {
            assert!(reason.contains("transfer to null identity not allowed"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(suite.cw20_balance(&suite.vault), Uint128::new(1_000));
}

#[test]
fn test_send_token_rejects_null_asset() {
    let mut suite = setup();
    let admin = suite.admin.clone();

    let err = suite
        .send_token(&admin, "terra1bob", AssetInfo::native(""), 1)
        .unwrap_err();

    assert!(matches!(
        contract_error(err),
        ContractError::InvalidAddress { .. }
    ));
}

#[test]
fn test_send_token_rejects_zero_amount() {
    let mut suite = setup();
    let admin = suite.admin.clone();

    let err = suite
        .send_token(&admin, "terra1bob", AssetInfo::native("uluna"), 0)
        .unwrap_err();
    assert!(matches!(
        contract_error(err),
        ContractError::InvalidAmount { .. }
    ));

    // Nothing moved
    assert_eq!(suite.bank_balance(&suite.vault, "uluna"), Uint128::zero());
}
