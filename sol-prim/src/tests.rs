mod address;
mod signature;
