mod naive;
mod smart;
mod tick;
