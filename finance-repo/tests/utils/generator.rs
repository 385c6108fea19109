use fake::faker::lorem::en::Sentence;
use fake::{Fake, Faker};
use finance_repo::transaction_repo::NewTransaction;
use rand::seq::SliceRandom;

trait Generator<T> {
    fn gen(&mut self) -> T;
}

struct Predefined<T> {
    values: Vec<T>,
    current_pos: usize,
}

impl<T> Predefined<T> {
    fn boxed(values: Vec<T>) -> Box<Predefined<T>> {
        Box::new(Predefined {
            values,
            current_pos: 0,
        })
    }
}

impl<T: Clone> Generator<T> for Predefined<T> {
    fn gen(&mut self) -> T {
        let v = self.values[self.current_pos].clone();
        self.current_pos += 1;
        v
    }
}

struct RandomSample<T> {
    values: Vec<T>,
}

impl<T> RandomSample<T> {
    fn boxed(values: Vec<T>) -> Box<RandomSample<T>> {
        Box::new(RandomSample { values })
    }
}

impl<T: Clone> Generator<T> for RandomSample<T> {
    fn gen(&mut self) -> T {
        self.values.choose(&mut rand::thread_rng()).unwrap().clone()
    }
}

struct FakeGenerator<F: Fake> {
    fake: F,
}

impl<F: Fake> FakeGenerator<F> {
    fn boxed(fake: F) -> Box<FakeGenerator<F>> {
        Box::new(FakeGenerator { fake })
    }
}

impl<T: fake::Dummy<F>, F> Generator<T> for FakeGenerator<F> {
    fn gen(&mut self) -> T {
        self.fake.fake()
    }
}

/// Amounts with two decimal places, both signs.
struct FakeAmount;

impl Generator<f64> for FakeAmount {
    fn gen(&mut self) -> f64 {
        f64::from(Faker.fake::<i32>()) / 100.0
    }
}

struct FakeDate;

impl Generator<String> for FakeDate {
    fn gen(&mut self) -> String {
        format!(
            "{}-{:02}-{:02}",
            (2000u32..2030).fake::<u32>(),
            (1u32..13).fake::<u32>(),
            (1u32..29).fake::<u32>()
        )
    }
}

#[allow(dead_code)]
pub struct NewTransactionGenerator {
    desc_gen: Box<dyn Generator<String>>,
    amnt_gen: Box<dyn Generator<f64>>,
    cat_gen: Box<dyn Generator<String>>,
    date_gen: Box<dyn Generator<String>>,
    income_gen: Box<dyn Generator<bool>>,
}

#[allow(dead_code)]
impl NewTransactionGenerator {
    pub fn with_descriptions(mut self, descriptions: Vec<&str>) -> NewTransactionGenerator {
        let descriptions = descriptions.into_iter().map(|s| s.to_string()).collect();
        self.desc_gen = Predefined::boxed(descriptions);
        self
    }

    pub fn with_amounts(mut self, amounts: Vec<f64>) -> NewTransactionGenerator {
        self.amnt_gen = Predefined::boxed(amounts);
        self
    }

    pub fn with_categories(mut self, categories: Vec<&str>) -> NewTransactionGenerator {
        let categories = categories.into_iter().map(|s| s.to_string()).collect();
        self.cat_gen = Predefined::boxed(categories);
        self
    }

    pub fn with_dates(mut self, dates: Vec<&str>) -> NewTransactionGenerator {
        let dates = dates.into_iter().map(|s| s.to_string()).collect();
        self.date_gen = Predefined::boxed(dates);
        self
    }

    pub fn with_income_flags(mut self, flags: Vec<bool>) -> NewTransactionGenerator {
        self.income_gen = Predefined::boxed(flags);
        self
    }

    pub fn generate(&mut self) -> NewTransaction {
        NewTransaction::new(
            self.desc_gen.gen(),
            self.amnt_gen.gen(),
            self.cat_gen.gen(),
            self.date_gen.gen(),
            self.income_gen.gen(),
        )
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<NewTransaction> {
        let mut vec = Vec::with_capacity(count);
        for _ in 0..count {
            vec.push(self.generate())
        }
        vec
    }
}

impl Default for NewTransactionGenerator {
    fn default() -> Self {
        NewTransactionGenerator {
            desc_gen: FakeGenerator::boxed(Sentence(1..4)),
            amnt_gen: Box::new(FakeAmount),
            cat_gen: RandomSample::boxed(vec![
                "Misc".to_string(),
                "Food".to_string(),
                "Salary".to_string(),
                "Transportation".to_string(),
            ]),
            date_gen: Box::new(FakeDate),
            income_gen: FakeGenerator::boxed(Faker),
        }
    }
}
