use curio_quant::model::rating::RatingLabel;
use curio_quant::{score, FeatureVector};

fn features(
    price: f64,
    rarity: f64,
    popularity: f64,
    artist: f64,
    t30: f64,
    t90: f64,
    t1y: f64,
    vol: f64,
    sentiment: f64,
) -> FeatureVector {
    FeatureVector {
        current_price: Some(price),
        rarity_score: Some(rarity),
        popularity_score: Some(popularity),
        artist_score: Some(artist),
        trend_30d: Some(t30),
        trend_90d: Some(t90),
        trend_1y: Some(t1y),
        volatility: Some(vol),
        market_sentiment: Some(sentiment),
    }
}

#[test]
fn score_is_always_in_bounds() {
    let prices = [1.0, 50.0, 500.0, 5000.0, 50_000.0];
    let scores = [0.0, 5.0, 10.0];
    let trends = [-60.0, -15.0, 0.0, 25.0, 80.0];
    let vols = [0.0, 15.0, 50.0, 120.0];
    for &p in &prices {
        for &r in &scores {
            for &t in &trends {
                for &v in &vols {
                    let rating = score(&features(p, r, r * 10.0, r, t, t, t, v, r * 10.0));
                    assert!(
                        (1.0..=10.0).contains(&rating.score),
                        "out of bounds: {:?}",
                        rating
                    );
                    assert_eq!(rating.label, RatingLabel::from_score(rating.score));
                }
            }
        }
    }
}

#[test]
fn strong_fundamentals_and_momentum_earn_strong_buy() {
    let rating = score(&features(
        800.0, 10.0, 100.0, 10.0, 25.0, 30.0, 50.0, 12.0, 90.0,
    ));
    assert_eq!(rating.label, RatingLabel::StrongBuy);
    assert!(rating.score >= 8.5);
}

#[test]
fn collapsing_overpriced_item_scores_sell() {
    let rating = score(&features(
        8000.0, 0.0, 10.0, 1.0, -18.0, -20.0, -28.0, 50.0, 15.0,
    ));
    assert_eq!(rating.label, RatingLabel::Sell);
    assert!((rating.score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn default_features_land_in_hold() {
    let rating = score(&FeatureVector::default());
    assert_eq!(rating.label, RatingLabel::Hold);
    assert!(rating.score > 5.0 && rating.score < 6.5, "{:?}", rating);
}

#[test]
fn degenerate_fields_never_panic_or_escape_bounds() {
    let f = FeatureVector {
        current_price: Some(f64::NAN),
        rarity_score: Some(f64::INFINITY),
        trend_1y: Some(f64::NEG_INFINITY),
        volatility: Some(-4.0),
        ..Default::default()
    };
    let rating = score(&f);
    assert!(rating.score.is_finite());
    assert!((1.0..=10.0).contains(&rating.score));
}

#[test]
fn higher_rarity_never_lowers_the_score() {
    let low = score(&features(300.0, 2.0, 60.0, 5.0, 3.0, 6.0, 12.0, 15.0, 55.0));
    let high = score(&features(300.0, 9.0, 60.0, 5.0, 3.0, 6.0, 12.0, 15.0, 55.0));
    assert!(high.score >= low.score);
}

#[test]
fn deep_negative_momentum_is_penalized() {
    let steady = score(&features(300.0, 6.0, 70.0, 6.0, 0.0, 0.0, 0.0, 15.0, 55.0));
    let crashing = score(&features(
        300.0, 6.0, 70.0, 6.0, -16.0, -10.0, -25.0, 15.0, 55.0,
    ));
    // Band scaling already drags momentum down; the crash penalties must
    // push it further than scaling alone.
    assert!(steady.score - crashing.score >= 2.0);
}
