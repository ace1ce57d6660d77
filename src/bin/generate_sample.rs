use serde::Serialize;

/// One row in the dashboard's input schema.
#[derive(Serialize)]
struct SampleRow {
    uniq_id: String,
    product_name: String,
    product_category_tree: String,
    pid: String,
    retail_price: Option<u32>,
    discounted_price: Option<u32>,
    product_rating: String,
    overall_rating: String,
    brand: String,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// (main category, sub categories, typical retail price)
const CATALOGUE: &[(&str, &[&str], f64)] = &[
    ("Clothing", &["Women's Clothing", "Men's Clothing", "Kids' Clothing"], 1200.0),
    ("Jewellery", &["Necklaces", "Rings", "Earrings"], 2500.0),
    ("Footwear", &["Women's Footwear", "Men's Footwear"], 1800.0),
    ("Mobiles & Accessories", &["Cases & Covers", "Chargers"], 600.0),
    ("Automotive", &["Accessories & Spare parts"], 900.0),
    ("Home Decor & Festive Needs", &["Wall Decor", "Showpieces"], 750.0),
    ("Beauty and Personal Care", &["Fragrances", "Makeup"], 450.0),
    ("Watches", &["Wrist Watches"], 3000.0),
    ("Kitchen & Dining", &["Cookware", "Tableware"], 1100.0),
    ("Computers", &["Laptop Accessories", "Storage"], 1600.0),
];

const BRANDS: &[&str] = &["Alisha", "FabHomeDecor", "Sicons", "Eternal Gandhi", "dilli bazaar"];

fn rating(rng: &mut SimpleRng) -> String {
    // most products on the site carry no rating
    if rng.next_f64() < 0.9 {
        "No rating available".to_string()
    } else {
        let r = 1.0 + (rng.next_f64() * 4.0 * 10.0).round() / 10.0;
        format!("{r:.1}")
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "flipkart_com-ecommerce_sample.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    let n_rows = 2000;
    for i in 0..n_rows {
        let (main, subs, base_price) = *rng.pick(CATALOGUE);
        let sub = *rng.pick(subs);
        let brand = *rng.pick(BRANDS);

        let retail = (base_price * (0.3 + rng.next_f64() * 1.7)).round() as u32;
        let discount = rng.next_f64() * 0.8;
        let discounted = (retail as f64 * (1.0 - discount)).round() as u32;
        // a handful of listings have no price at all
        let priced = rng.next_f64() > 0.01;

        let product_rating = rating(&mut rng);
        let overall_rating = product_rating.clone();

        writer.serialize(SampleRow {
            uniq_id: format!("{:016x}", rng.next_u64()),
            product_name: format!("{brand} {sub} #{i}"),
            product_category_tree: format!("['{main} >> {sub} >> {brand}']"),
            pid: format!("PID{:08}", i),
            retail_price: priced.then_some(retail),
            discounted_price: priced.then_some(discounted),
            product_rating,
            overall_rating,
            brand: brand.to_string(),
        })?;
    }
    writer.flush()?;

    println!("Wrote {n_rows} products to {output_path}");
    Ok(())
}
