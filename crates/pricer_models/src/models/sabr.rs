//! SABRモデル実装
//!
//! SABR (Stochastic Alpha, Beta, Rho) モデルは以下のSDEで記述される
//! 確率的ボラティリティモデル:
//! ```text
//! dF = alpha * F^beta * dW_F
//! d(alpha) = nu * alpha * dW_alpha
//! E[dW_F * dW_alpha] = rho * dt
//! ```
//! ここで:
//! - F = フォワード価格
//! - alpha = 瞬間ボラティリティ
//! - beta = CEVパラメータ (0: Normal, 1: Lognormal)
//! - nu = ボラティリティのボラティリティ (vol-of-vol)
//! - rho = フォワード価格とボラティリティの相関
//!
//! ## Hagan公式
//!
//! 本実装ではHagan et al. (2002) のインプライドボラティリティ近似公式を使用。
//! ATM近傍では展開公式を使用して数値安定性を確保。
//!
//! ## 使用例
//!
//! ```
//! use pricer_models::models::sabr::{SABRParams, SABRError};
//!
//! // パラメータを作成
//! let params = SABRParams::new(
//!     100.0,  // フォワード価格
//!     0.2,    // 初期ボラティリティ (alpha)
//!     0.4,    // vol-of-vol (nu)
//!     -0.3,   // 相関 (rho)
//!     0.5,    // ベータ
//!     1.0,    // 満期
//! );
//! assert!(params.is_ok());
//! ```

use pricer_core::math::smoothing::{smooth_log, smooth_pow};
use pricer_core::traits::Float;
use thiserror::Error;

/// SABRモデルエラー型
///
/// パラメータ検証と数値計算時のエラーを表現する。
/// `thiserror`クレートを使用して構造化されたエラー情報を提供。
///
/// # バリアント
///
/// - `InvalidForward`: フォワード価格が正でない
/// - `InvalidAlpha`: 初期ボラティリティが正でない
/// - `InvalidNu`: vol-of-volが負
/// - `InvalidBeta`: ベータが[0, 1]の範囲外
/// - `InvalidRho`: 相関が(-1, 1)の範囲外
/// - `InvalidMaturity`: 満期が正でない
/// - `InvalidStrike`: ストライクが正でない
/// - `NegativeImpliedVol`: 負のインプライドボラティリティが計算された
/// - `NumericalInstability`: 数値計算の不安定性
/// - `NonFinite`: NaNまたは無限大が検出された
///
/// # 例
///
/// ```
/// use pricer_models::models::sabr::SABRError;
///
/// let err = SABRError::InvalidAlpha(-0.1);
/// assert!(format!("{}", err).contains("-0.1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SABRError {
    /// 無効なフォワード価格（正でなければならない）
    #[error("無効なフォワード価格: F = {0} (正の値が必要)")]
    InvalidForward(f64),

    /// 無効な初期ボラティリティ（正でなければならない）
    #[error("無効な初期ボラティリティ: alpha = {0} (正の値が必要)")]
    InvalidAlpha(f64),

    /// 無効なvol-of-vol（非負でなければならない）
    #[error("無効なvol-of-vol: nu = {0} (非負の値が必要)")]
    InvalidNu(f64),

    /// 無効なベータ（0から1の範囲内でなければならない）
    #[error("無効なベータ: beta = {0} ([0, 1]の範囲が必要)")]
    InvalidBeta(f64),

    /// 無効な相関係数（-1から1の開区間内でなければならない）
    #[error("無効な相関係数: rho = {0} ((-1, 1)の範囲が必要)")]
    InvalidRho(f64),

    /// 無効な満期（正でなければならない）
    #[error("無効な満期: T = {0} (正の値が必要)")]
    InvalidMaturity(f64),

    /// 無効なATM閾値（正でなければならない）
    #[error("無効なATM閾値: {0} (正の値が必要)")]
    InvalidAtmThreshold(f64),

    /// 無効なsmoothing epsilon（正でなければならない）
    #[error("無効なsmoothing epsilon: {0} (正の値が必要)")]
    InvalidEpsilon(f64),

    /// 無効なストライク価格（正でなければならない）
    #[error("無効なストライク価格: K = {0} (正の値が必要)")]
    InvalidStrike(f64),

    /// 負のインプライドボラティリティが計算された
    #[error("ストライク {0} で負のインプライドボラティリティが計算されました")]
    NegativeImpliedVol(f64),

    /// 数値的不安定性が検出された
    #[error("数値的不安定性: {0}")]
    NumericalInstability(String),

    /// NaNまたは無限大が検出された
    #[error("{0}でNaNまたはInfinityが検出されました")]
    NonFinite(String),
}

/// SABRモデルパラメータ
///
/// # 型パラメータ
///
/// * `T` - Float型（f64またはAD互換のDualNumber）
///
/// # フィールド
///
/// * `forward` - フォワード価格 (F > 0)
/// * `alpha` - 初期ボラティリティ (alpha > 0)
/// * `nu` - ボラティリティのボラティリティ (nu >= 0)
/// * `rho` - 相関係数 (-1 < rho < 1)
/// * `beta` - CEVパラメータ (0 <= beta <= 1)
/// * `maturity` - 満期までの時間 (T > 0)
/// * `atm_threshold` - ATM近傍判定閾値
/// * `smoothing_epsilon` - smooth approximation用のepsilon
///
/// # 例
///
/// ```
/// use pricer_models::models::sabr::SABRParams;
///
/// let params = SABRParams::new(100.0, 0.2, 0.4, -0.3, 0.5, 1.0);
/// assert!(params.is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SABRParams<T: Float> {
    /// フォワード価格 (F)
    pub forward: T,
    /// 初期ボラティリティ (alpha)
    pub alpha: T,
    /// ボラティリティのボラティリティ (nu)
    pub nu: T,
    /// 相関係数 (rho)
    pub rho: T,
    /// CEVパラメータ (beta): 0 = Normal, 1 = Lognormal
    pub beta: T,
    /// 満期までの時間
    pub maturity: T,
    /// ATM近傍判定閾値
    pub atm_threshold: T,
    /// smooth approximation epsilon
    pub smoothing_epsilon: T,
}

impl<T: Float> SABRParams<T> {
    /// 新しいSABRパラメータを作成（検証付き）
    ///
    /// # 引数
    ///
    /// * `forward` - フォワード価格（正でなければならない）
    /// * `alpha` - 初期ボラティリティ（正でなければならない）
    /// * `nu` - vol-of-vol（非負でなければならない）
    /// * `rho` - 相関係数（-1から1の開区間）
    /// * `beta` - CEVパラメータ（0から1の範囲）
    /// * `maturity` - 満期（正でなければならない）
    ///
    /// # 戻り値
    ///
    /// パラメータが有効な場合は`Ok(SABRParams)`、無効な場合は`Err(SABRError)`
    ///
    /// # 例
    ///
    /// ```
    /// use pricer_models::models::sabr::SABRParams;
    ///
    /// // 有効なパラメータ
    /// let params = SABRParams::new(100.0, 0.2, 0.4, -0.3, 0.5, 1.0);
    /// assert!(params.is_ok());
    ///
    /// // 無効なalpha
    /// let invalid = SABRParams::new(100.0, -0.2, 0.4, -0.3, 0.5, 1.0);
    /// assert!(invalid.is_err());
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        forward: T,
        alpha: T,
        nu: T,
        rho: T,
        beta: T,
        maturity: T,
    ) -> Result<Self, SABRError> {
        let params = Self {
            forward,
            alpha,
            nu,
            rho,
            beta,
            maturity,
            atm_threshold: T::from(1e-4).unwrap_or(T::zero()),
            smoothing_epsilon: T::from(1e-8).unwrap_or(T::zero()),
        };
        params.validate()?;
        Ok(params)
    }

    /// カスタムATM閾値を設定
    ///
    /// # 引数
    ///
    /// * `threshold` - ATM近傍判定閾値（正でなければならない）
    ///
    /// # 戻り値
    ///
    /// 更新されたパラメータ
    pub fn with_atm_threshold(mut self, threshold: T) -> Result<Self, SABRError> {
        if threshold <= T::zero() {
            return Err(SABRError::InvalidAtmThreshold(
                threshold.to_f64().unwrap_or(f64::NAN),
            ));
        }
        self.atm_threshold = threshold;
        Ok(self)
    }

    /// カスタムsmoothing epsilonを設定
    ///
    /// # 引数
    ///
    /// * `epsilon` - smoothing epsilon（正でなければならない）
    ///
    /// # 戻り値
    ///
    /// 更新されたパラメータ
    pub fn with_epsilon(mut self, epsilon: T) -> Result<Self, SABRError> {
        if epsilon <= T::zero() {
            return Err(SABRError::InvalidEpsilon(
                epsilon.to_f64().unwrap_or(f64::NAN),
            ));
        }
        self.smoothing_epsilon = epsilon;
        Ok(self)
    }

    /// パラメータを検証
    ///
    /// # 戻り値
    ///
    /// パラメータが有効な場合は`Ok(())`、無効な場合は`Err(SABRError)`
    pub fn validate(&self) -> Result<(), SABRError> {
        // フォワード価格は正でなければならない
        if self.forward <= T::zero() {
            return Err(SABRError::InvalidForward(
                self.forward.to_f64().unwrap_or(f64::NAN),
            ));
        }

        // 初期ボラティリティは正でなければならない
        if self.alpha <= T::zero() {
            return Err(SABRError::InvalidAlpha(
                self.alpha.to_f64().unwrap_or(f64::NAN),
            ));
        }

        // vol-of-volは非負でなければならない
        if self.nu < T::zero() {
            return Err(SABRError::InvalidNu(
                self.nu.to_f64().unwrap_or(f64::NAN),
            ));
        }

        // ベータは[0, 1]の範囲でなければならない
        if self.beta < T::zero() || self.beta > T::one() {
            return Err(SABRError::InvalidBeta(
                self.beta.to_f64().unwrap_or(f64::NAN),
            ));
        }

        // 相関は(-1, 1)の開区間でなければならない
        if self.rho <= -T::one() || self.rho >= T::one() {
            return Err(SABRError::InvalidRho(
                self.rho.to_f64().unwrap_or(f64::NAN),
            ));
        }

        // 満期は正でなければならない
        if self.maturity <= T::zero() {
            return Err(SABRError::InvalidMaturity(
                self.maturity.to_f64().unwrap_or(f64::NAN),
            ));
        }

        Ok(())
    }

    /// Normal SABRモード (beta = 0) かどうか
    ///
    /// # 戻り値
    ///
    /// beta = 0 の場合は true
    pub fn is_normal(&self) -> bool {
        self.beta.abs() < self.smoothing_epsilon
    }

    /// Lognormal SABRモード (beta = 1) かどうか
    ///
    /// # 戻り値
    ///
    /// beta = 1 の場合は true
    pub fn is_lognormal(&self) -> bool {
        (self.beta - T::one()).abs() < self.smoothing_epsilon
    }

    /// フォワード価格を取得
    pub fn forward(&self) -> T {
        self.forward
    }

    /// 初期ボラティリティを取得
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// vol-of-volを取得
    pub fn nu(&self) -> T {
        self.nu
    }

    /// 相関係数を取得
    pub fn rho(&self) -> T {
        self.rho
    }

    /// ベータを取得
    pub fn beta(&self) -> T {
        self.beta
    }

    /// 満期を取得
    pub fn maturity(&self) -> T {
        self.maturity
    }

    /// ATM閾値を取得
    pub fn atm_threshold(&self) -> T {
        self.atm_threshold
    }

    /// smoothing epsilonを取得
    pub fn smoothing_epsilon(&self) -> T {
        self.smoothing_epsilon
    }
}

/// SABRモデル（インプライドボラティリティ計算用）
///
/// Hagan et al. (2002) のインプライドボラティリティ近似公式を実装。
/// ATM近傍では展開公式を使用して数値安定性を確保する。
///
/// # 型パラメータ
///
/// * `T` - Float型（f64またはAD互換のDualNumber）
///
/// # Hagan公式
///
/// インプライドボラティリティは以下の式で近似される:
/// ```text
/// σ_B(K,F) = α / [(FK)^((1-β)/2) * D(F/K)]
///            × (z/x(z))
///            × [1 + expansion_terms * T]
/// ```
/// ここで:
/// - D(F/K) = 1 + ((1-β)²/24)*ln²(F/K) + ((1-β)⁴/1920)*ln⁴(F/K)
/// - z = (ν/α)*(FK)^((1-β)/2)*ln(F/K)
/// - x(z) = ln((√(1-2ρz+z²)+z-ρ)/(1-ρ))
///
/// # 例
///
/// ```
/// use pricer_models::models::sabr::{SABRModel, SABRParams};
///
/// let params = SABRParams::new(100.0, 0.2, 0.4, -0.3, 0.5, 1.0).unwrap();
/// let model = SABRModel::new(params).unwrap();
///
/// // ATMインプライドボラティリティ
/// let atm_vol = model.atm_vol();
/// assert!(atm_vol > 0.0);
///
/// // OTMストライクのインプライドボラティリティ
/// let otm_vol = model.implied_vol(110.0);
/// assert!(otm_vol.is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SABRModel<T: Float> {
    /// モデルパラメータ
    params: SABRParams<T>,
}

impl<T: Float> SABRModel<T> {
    /// 新しいSABRモデルを作成
    ///
    /// # 引数
    ///
    /// * `params` - SABRパラメータ
    ///
    /// # 戻り値
    ///
    /// 検証済みのSABRモデル
    ///
    /// # エラー
    ///
    /// パラメータが無効な場合はエラーを返す
    pub fn new(params: SABRParams<T>) -> Result<Self, SABRError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// パラメータへの参照を取得
    pub fn params(&self) -> &SABRParams<T> {
        &self.params
    }

    /// ATM（At-The-Money）インプライドボラティリティを計算
    ///
    /// ATMではストライク K = フォワード F なので、Hagan公式は簡略化される:
    /// ```text
    /// σ_ATM = α / F^(1-β) * [1 + expansion_terms * T]
    /// ```
    ///
    /// # 戻り値
    ///
    /// ATMインプライドボラティリティ
    pub fn atm_vol(&self) -> T {
        let f = self.params.forward;
        let alpha = self.params.alpha;
        let beta = self.params.beta;
        let nu = self.params.nu;
        let rho = self.params.rho;
        let t = self.params.maturity;
        let eps = self.params.smoothing_epsilon;

        let one = T::one();
        let one_minus_beta = one - beta;

        // F^(1-β) using smooth_pow for AD compatibility
        let f_pow = smooth_pow(f, one_minus_beta, eps);

        // Base term: α / F^(1-β)
        let base = alpha / f_pow;

        // Higher order expansion terms
        // term1 = (1-β)² / 24 * α² / F^(2(1-β))
        let two = T::from(2.0).unwrap();
        let twenty_four = T::from(24.0).unwrap();

        let f_pow_2 = smooth_pow(f, two * one_minus_beta, eps);
        let term1 = one_minus_beta * one_minus_beta / twenty_four * alpha * alpha / f_pow_2;

        // term2 = ρ * β * ν * α / (4 * F^(1-β))
        let four = T::from(4.0).unwrap();
        let term2 = rho * beta * nu * alpha / (four * f_pow);

        // term3 = (2 - 3ρ²) / 24 * ν²
        let three = T::from(3.0).unwrap();
        let term3 = (two - three * rho * rho) / twenty_four * nu * nu;

        // Total expansion
        let expansion = one + (term1 + term2 + term3) * t;

        base * expansion
    }

    /// 任意のストライクに対するインプライドボラティリティを計算
    ///
    /// Hagan et al. (2002) の近似公式を使用。
    /// ATM近傍（|ln(F/K)| < atm_threshold）では展開公式を使用して
    /// 数値安定性を確保する。
    ///
    /// beta=0の場合はNormal SABR公式、beta=1の場合はLognormal SABR公式を使用。
    ///
    /// # 引数
    ///
    /// * `strike` - ストライク価格（正でなければならない）
    ///
    /// # 戻り値
    ///
    /// インプライドボラティリティ（Black-Scholes volatility）
    ///
    /// # エラー
    ///
    /// - `InvalidStrike`: ストライクが正でない
    /// - `NegativeImpliedVol`: 負のボラティリティが計算された
    /// - `NonFinite`: NaN/Infinityが検出された
    pub fn implied_vol(&self, strike: T) -> Result<T, SABRError> {
        // ストライク検証
        if strike <= T::zero() {
            return Err(SABRError::InvalidStrike(
                strike.to_f64().unwrap_or(f64::NAN),
            ));
        }

        let f = self.params.forward;
        let log_fk = smooth_log(f / strike, self.params.smoothing_epsilon);

        // ATM近傍判定
        let vol = if log_fk.abs() < self.params.atm_threshold {
            self.implied_vol_atm_expansion(strike)
        } else if self.params.is_normal() {
            // Normal SABR (beta=0) specialized formula
            self.implied_vol_normal(strike)
        } else if self.params.is_lognormal() {
            // Lognormal SABR (beta=1) specialized formula
            self.implied_vol_lognormal(strike)
        } else {
            // General Hagan formula
            self.implied_vol_hagan(strike)
        };

        // 結果の検証
        if !vol.is_finite() {
            return Err(SABRError::NonFinite("implied_vol".to_string()));
        }

        // 負のボラティリティチェック
        if vol <= T::zero() {
            return Err(SABRError::NegativeImpliedVol(
                strike.to_f64().unwrap_or(f64::NAN),
            ));
        }

        Ok(vol)
    }

    /// ATM近傍の展開公式によるインプライドボラティリティ計算
    ///
    /// K ≈ F の場合、Hagan公式の特異点を回避するために
    /// Taylor展開を使用する。
    fn implied_vol_atm_expansion(&self, strike: T) -> T {
        let f = self.params.forward;
        let alpha = self.params.alpha;
        let beta = self.params.beta;
        let nu = self.params.nu;
        let rho = self.params.rho;
        let t = self.params.maturity;
        let eps = self.params.smoothing_epsilon;

        let one = T::one();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let four = T::from(4.0).unwrap();
        let twenty_four = T::from(24.0).unwrap();

        let one_minus_beta = one - beta;

        // 幾何平均 (F*K)^((1-β)/2)
        let fk = f * strike;
        let fk_pow = smooth_pow(fk, one_minus_beta / two, eps);

        // Base term: α / (FK)^((1-β)/2)
        let base = alpha / fk_pow;

        // Higher order expansion terms
        // term1 = (1-β)² / 24 * α² / (FK)^(1-β)
        let fk_pow_full = smooth_pow(fk, one_minus_beta, eps);
        let term1 = one_minus_beta * one_minus_beta / twenty_four * alpha * alpha / fk_pow_full;

        // term2 = ρ * β * ν * α / (4 * (FK)^((1-β)/2))
        let term2 = rho * beta * nu * alpha / (four * fk_pow);

        // term3 = (2 - 3ρ²) / 24 * ν²
        let term3 = (two - three * rho * rho) / twenty_four * nu * nu;

        // Total expansion
        let expansion = one + (term1 + term2 + term3) * t;

        base * expansion
    }

    /// 一般的なHagan公式によるインプライドボラティリティ計算
    ///
    /// 完全なHagan et al. (2002) 公式:
    /// σ_B(K,F) = α / [(FK)^((1-β)/2) * D] × (z/x(z)) × [1 + expansion * T]
    fn implied_vol_hagan(&self, strike: T) -> T {
        let f = self.params.forward;
        let k = strike;
        let alpha = self.params.alpha;
        let beta = self.params.beta;
        let nu = self.params.nu;
        let rho = self.params.rho;
        let t = self.params.maturity;
        let eps = self.params.smoothing_epsilon;

        let one = T::one();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let four = T::from(4.0).unwrap();
        let twenty_four = T::from(24.0).unwrap();
        let one_thousand_nine_twenty = T::from(1920.0).unwrap();

        let one_minus_beta = one - beta;

        // ln(F/K)
        let log_fk = smooth_log(f / k, eps);

        // (FK)^((1-β)/2)
        let fk = f * k;
        let fk_pow_half = smooth_pow(fk, one_minus_beta / two, eps);

        // D(F/K) = 1 + ((1-β)²/24)*ln²(F/K) + ((1-β)⁴/1920)*ln⁴(F/K)
        let log_fk_2 = log_fk * log_fk;
        let log_fk_4 = log_fk_2 * log_fk_2;
        let one_minus_beta_2 = one_minus_beta * one_minus_beta;
        let one_minus_beta_4 = one_minus_beta_2 * one_minus_beta_2;

        let d_term1 = one_minus_beta_2 / twenty_four * log_fk_2;
        let d_term2 = one_minus_beta_4 / one_thousand_nine_twenty * log_fk_4;
        let d = one + d_term1 + d_term2;

        // z = (ν/α) * (FK)^((1-β)/2) * ln(F/K)
        let z = (nu / alpha) * fk_pow_half * log_fk;

        // x(z) = ln((√(1-2ρz+z²) + z - ρ) / (1-ρ))
        let x_z = self.compute_x_of_z(z, rho);

        // z/x(z) coefficient
        let z_over_x = if z.abs() < eps {
            // z → 0 のとき z/x(z) → 1
            one
        } else {
            z / x_z
        };

        // Base term: α / [(FK)^((1-β)/2) * D]
        let base = alpha / (fk_pow_half * d);

        // Higher order expansion terms (at FK midpoint)
        let fk_pow_full = smooth_pow(fk, one_minus_beta, eps);

        // term1 = (1-β)² / 24 * α² / (FK)^(1-β)
        let term1 = one_minus_beta_2 / twenty_four * alpha * alpha / fk_pow_full;

        // term2 = ρ * β * ν * α / (4 * (FK)^((1-β)/2))
        let term2 = rho * beta * nu * alpha / (four * fk_pow_half);

        // term3 = (2 - 3ρ²) / 24 * ν²
        let term3 = (two - three * rho * rho) / twenty_four * nu * nu;

        // Total expansion
        let expansion = one + (term1 + term2 + term3) * t;

        base * z_over_x * expansion
    }

    /// x(z) 関数の計算
    ///
    /// x(z) = ln((√(1-2ρz+z²) + z - ρ) / (1-ρ))
    ///
    /// 数値安定性のために smooth_log を使用
    fn compute_x_of_z(&self, z: T, rho: T) -> T {
        let eps = self.params.smoothing_epsilon;
        let one = T::one();
        let two = T::from(2.0).unwrap();

        // √(1 - 2ρz + z²)
        let discriminant = one - two * rho * z + z * z;
        // 数値安定性のため、discriminant が負にならないようにフロアを設定
        let safe_discriminant = if discriminant < eps * eps {
            eps * eps
        } else {
            discriminant
        };
        let sqrt_disc = safe_discriminant.sqrt();

        // numerator = √(1-2ρz+z²) + z - ρ
        let numerator = sqrt_disc + z - rho;

        // denominator = 1 - ρ
        let denominator = one - rho;

        // x(z) = ln(numerator / denominator)
        // smooth_log を使用して数値安定性を確保
        smooth_log(numerator / denominator, eps)
    }

    /// パラメータを検証
    pub fn validate(&self) -> Result<(), SABRError> {
        self.params.validate()
    }

    /// フロア付きインプライドボラティリティを計算
    ///
    /// 負のインプライドボラティリティが計算された場合、指定されたフロア値を適用する。
    /// これは極端なストライクやパラメータ組み合わせで発生しうる数値的問題を回避するため。
    ///
    /// # 引数
    ///
    /// * `strike` - ストライク価格（正でなければならない）
    /// * `floor` - 最小ボラティリティフロア値（通常は小さな正の値、例: 0.0001）
    ///
    /// # 戻り値
    ///
    /// インプライドボラティリティ（floor以上の値が保証される）
    ///
    /// # エラー
    ///
    /// - `InvalidStrike`: ストライクが正でない
    /// - `NonFinite`: NaN/Infinityが検出された
    ///
    /// # 例
    ///
    /// ```
    /// use pricer_models::models::sabr::{SABRModel, SABRParams};
    ///
    /// let params = SABRParams::new(100.0, 0.2, 0.4, -0.3, 0.5, 1.0).unwrap();
    /// let model = SABRModel::new(params).unwrap();
    ///
    /// // フロア付きでIVを計算
    /// let iv = model.implied_vol_with_floor(100.0, 0.0001);
    /// assert!(iv.is_ok());
    /// assert!(iv.unwrap() >= 0.0001);
    /// ```
    pub fn implied_vol_with_floor(&self, strike: T, floor: T) -> Result<T, SABRError> {
        // ストライク検証
        if strike <= T::zero() {
            return Err(SABRError::InvalidStrike(
                strike.to_f64().unwrap_or(f64::NAN),
            ));
        }

        let f = self.params.forward;
        let log_fk = smooth_log(f / strike, self.params.smoothing_epsilon);

        // ATM近傍判定
        let vol = if log_fk.abs() < self.params.atm_threshold {
            self.implied_vol_atm_expansion(strike)
        } else if self.params.is_normal() {
            // Normal SABR (beta=0) specialized formula
            self.implied_vol_normal(strike)
        } else if self.params.is_lognormal() {
            // Lognormal SABR (beta=1) specialized formula
            self.implied_vol_lognormal(strike)
        } else {
            // General Hagan formula
            self.implied_vol_hagan(strike)
        };

        // 結果の検証
        if !vol.is_finite() {
            return Err(SABRError::NonFinite("implied_vol".to_string()));
        }

        // フロアを適用
        let floored_vol = if vol < floor { floor } else { vol };

        Ok(floored_vol)
    }

    /// Normal SABR (beta=0) のインプライドボラティリティ計算
    ///
    /// beta=0の場合、Hagan公式は以下のように簡略化される:
    /// ```text
    /// σ_N = α * [1 + ((2-3ρ²)/24 * ν² + ρνα/(4F))*T] * z/x(z)
    /// ```
    /// ここで z = ν/α * (F-K)、ATMでは z/x(z) → 1
    ///
    /// Normal SABRでは結果は「Normal volatility」（絶対値単位）となる。
    fn implied_vol_normal(&self, strike: T) -> T {
        let f = self.params.forward;
        let k = strike;
        let alpha = self.params.alpha;
        let nu = self.params.nu;
        let rho = self.params.rho;
        let t = self.params.maturity;
        let eps = self.params.smoothing_epsilon;

        let one = T::one();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let four = T::from(4.0).unwrap();
        let twenty_four = T::from(24.0).unwrap();

        // z = ν/α * (F - K) for Normal SABR
        let f_minus_k = f - k;
        let z = if alpha > eps {
            (nu / alpha) * f_minus_k
        } else {
            T::zero()
        };

        // x(z) calculation
        let x_z = self.compute_x_of_z(z, rho);

        // z/x(z) coefficient
        let z_over_x = if z.abs() < eps {
            // z → 0 のとき z/x(z) → 1
            one
        } else {
            z / x_z
        };

        // Base term: α (for Normal SABR, no FK power adjustment)
        let base = alpha;

        // Higher order expansion terms for Normal SABR
        // term1 = 0 when beta = 0 (since (1-beta)^2 * alpha^2 / (FK)^(1-beta) involves log terms)
        // For Normal SABR, the expansion simplifies:
        // term1 = 0 (no contribution from this term in Normal model)
        let term1 = T::zero();

        // term2 = ρ * ν * α / (4 * F) when beta=0
        // Note: For Normal SABR, this term uses F directly
        let avg_f = (f + k) / two; // Use average for OTM consistency
        let term2 = if avg_f > eps {
            rho * nu * alpha / (four * avg_f)
        } else {
            T::zero()
        };

        // term3 = (2 - 3ρ²) / 24 * ν²
        let term3 = (two - three * rho * rho) / twenty_four * nu * nu;

        // Total expansion
        let expansion = one + (term1 + term2 + term3) * t;

        base * z_over_x * expansion
    }

    /// Lognormal SABR (beta=1) のインプライドボラティリティ計算
    ///
    /// beta=1の場合、(FK)^((1-β)/2) = 1 となり、Hagan公式は簡略化される:
    /// ```text
    /// σ_B = α * (z/x(z)) * [1 + ((2-3ρ²)/24 * ν² + ρνα/4)*T]
    /// ```
    /// ここで z = ν/α * ln(F/K)
    ///
    /// Lognormal SABRでは結果は「Black volatility」（対数単位）となる。
    fn implied_vol_lognormal(&self, strike: T) -> T {
        let f = self.params.forward;
        let k = strike;
        let alpha = self.params.alpha;
        let nu = self.params.nu;
        let rho = self.params.rho;
        let t = self.params.maturity;
        let eps = self.params.smoothing_epsilon;

        let one = T::one();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let four = T::from(4.0).unwrap();
        let twenty_four = T::from(24.0).unwrap();

        // ln(F/K)
        let log_fk = smooth_log(f / k, eps);

        // z = ν/α * ln(F/K) for Lognormal SABR (since (FK)^0 = 1)
        let z = if alpha > eps {
            (nu / alpha) * log_fk
        } else {
            T::zero()
        };

        // x(z) calculation
        let x_z = self.compute_x_of_z(z, rho);

        // z/x(z) coefficient
        let z_over_x = if z.abs() < eps {
            // z → 0 のとき z/x(z) → 1
            one
        } else {
            z / x_z
        };

        // Base term: α (for Lognormal SABR, (FK)^((1-1)/2) = 1)
        // D(F/K) = 1 when beta=1 (since (1-beta) = 0)
        let base = alpha;

        // Higher order expansion terms for Lognormal SABR
        // term1 = 0 when beta = 1 (since (1-beta)^2 = 0)
        let term1 = T::zero();

        // term2 = ρ * ν * α / 4 when beta=1
        let term2 = rho * nu * alpha / four;

        // term3 = (2 - 3ρ²) / 24 * ν²
        let term3 = (two - three * rho * rho) / twenty_four * nu * nu;

        // Total expansion
        let expansion = one + (term1 + term2 + term3) * t;

        base * z_over_x * expansion
    }
}
