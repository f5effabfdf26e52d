//! CometMigrator contract bindings.
//!
//! The migrator moves a Compound v2 position (collateral and borrows held as cTokens)
//! into a Comet deployment using a Uniswap v3 flash loan.
//!
//! The network configuration only hands out [`COMET_MIGRATOR_ABI`]. [`ICometMigrator`] is
//! not used inside this workspace: its tests pin the JSON ABI to the typed signatures, and
//! consumers use it to encode calls and decode events without parsing the JSON.

use alloy_sol_types::sol;

/// JSON ABI of the CometMigrator contract, as emitted by the compiler.
pub const COMET_MIGRATOR_ABI: &str = include_str!("../abi/CometMigrator.json");

sol! {
    /// CometMigrator - migrates Compound v2 positions into Compound v3
    interface ICometMigrator {
        /// Emitted once per completed migration
        event Migrated(
            address indexed user,
            CompoundV2Collateral[] collateral,
            CompoundV2Borrow[] borrows,
            uint256 flashAmountWithFee
        );

        /// Emitted when stray tokens are swept to the sweepee
        event Sweep(
            address indexed sweeper,
            address indexed recipient,
            address indexed asset,
            uint256 amount
        );

        error CompoundV2Error(uint256 loc, uint256 code);
        error CTokenTransferFailure();
        error InvalidCallback(uint256 loc);
        error InvalidConfiguration(uint256 loc);
        error Reentrancy(uint256 loc);
        error SweepFailure(uint256 loc);

        /// Migrate collateral and borrows from Compound v2 into Comet
        function migrate(
            CompoundV2Collateral[] calldata collateral,
            CompoundV2Borrow[] calldata borrows,
            uint256 flashAmount
        ) external;

        /// Sweep a token balance held by the migrator to the sweepee
        function sweep(address token) external;

        /// Uniswap v3 flash loan callback
        function uniswapV3FlashCallback(uint256 fee0, uint256 fee1, bytes calldata data) external;

        function baseToken() external view returns (address);
        function cETH() external view returns (address);
        function comet() external view returns (address);
        function inMigration() external view returns (uint256);
        function isUniswapLiquidityPoolToken0() external view returns (bool);
        function sweepee() external view returns (address);
        function uniswapLiquidityPool() external view returns (address);
        function weth() external view returns (address);
    }

    /// cToken collateral to move out of Compound v2
    #[derive(Debug)]
    struct CompoundV2Collateral {
        address cToken;
        uint256 amount;
    }

    /// cToken borrow to repay on Compound v2
    #[derive(Debug)]
    struct CompoundV2Borrow {
        address cToken;
        uint256 amount;
    }
}
