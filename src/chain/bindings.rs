//! Contract ABI bindings.
//!
//! Minimal interface surface — only the methods the agent actually calls.

use alloy::sol;

sol! {
    /// ERC20 token: balance query plus the allowance surface needed to
    /// authorize the router and farm as spenders.
    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }

    /// MasterChef-style reward farm. `withdraw` with a zero amount is the
    /// contract's reward-claim path; `pendingDino` is the farm's literal
    /// pending-reward query name.
    #[sol(rpc)]
    interface IMasterChef {
        function deposit(uint256 _pid, uint256 _amount) external;
        function withdraw(uint256 _pid, uint256 _amount) external;
        function pendingDino(uint256 _pid, address _user) external view returns (uint256);
    }

    /// UniswapV2-style router: quoting, exact-input swaps, and liquidity adds.
    #[sol(rpc)]
    interface IUniswapV2Router {
        function getAmountsOut(uint256 amountIn, address[] calldata path) external view returns (uint256[] memory amounts);
        function swapExactTokensForTokens(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external returns (uint256[] memory amounts);
        function addLiquidity(
            address tokenA,
            address tokenB,
            uint256 amountADesired,
            uint256 amountBDesired,
            uint256 amountAMin,
            uint256 amountBMin,
            address to,
            uint256 deadline
        ) external returns (uint256 amountA, uint256 amountB, uint256 liquidity);
    }
}
