//! Demonstration driver for the dynamic array container.
//!
//! Runs a scripted sequence of push/unshift/pop/shift/find operations
//! against [`DynamicArray`] and prints the contents, length, and capacity
//! after each stage for manual inspection.

use dynarr::{ArrayError, DynamicArray};

/// Prints the live elements tab-separated on a single line.
fn print_array(arr: &DynamicArray<i32>) {
  let rendered: Vec<String> = arr.as_slice().iter().map(|x| x.to_string()).collect();
  println!("{}", rendered.join("\t"));
}

fn main() -> Result<(), ArrayError> {
  let mut arr = DynamicArray::with_capacity(5);

  println!("Initial size: {}", arr.len());
  println!("Initial capacity: {}", arr.capacity());

  for value in [1, 2, 3] {
    arr.push(value)?;
  }
  println!("Size after adding 3 elements: {}", arr.len());
  println!("Capacity after adding 3 elements: {}", arr.capacity());

  for value in [4, 5, 6] {
    arr.push(value)?;
  }
  println!("Size after adding 6 elements: {}", arr.len());
  println!("Capacity after expansion: {}", arr.capacity());

  for value in [1, 2, 3] {
    arr.push(value)?;
  }
  arr.unshift(0)?;
  print_array(&arr);

  arr.pop()?;
  arr.shift()?;
  print_array(&arr);

  match arr.find_index(|&x| x == 2) {
    Some(index) => println!("Index of 2: {}", index),
    None => println!("Index of 2: not found"),
  }

  if let Some(found) = arr.find(|&x| x > 3) {
    println!("Found: {}", found);
  }

  Ok(())
}
