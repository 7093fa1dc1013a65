// @generated by arraygen. Do not edit.

use super::inline_array::InlineArray;

#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct Array1<T: Copy> {
    _e0: T,
}

impl<T: Copy> Array1<T> {
    pub const LENGTH: usize = 1;
}

impl<T: Copy> InlineArray<T> for Array1<T> {
    fn len(&self) -> usize {
        Self::LENGTH
    }

    fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts((self as *const Self).cast::<T>(), Self::LENGTH) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut((self as *mut Self).cast::<T>(), Self::LENGTH) }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct Array2<T: Copy> {
    _e0: T,
    _e1: T,
}

impl<T: Copy> Array2<T> {
    pub const LENGTH: usize = 2;
}

impl<T: Copy> InlineArray<T> for Array2<T> {
    fn len(&self) -> usize {
        Self::LENGTH
    }

    fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts((self as *const Self).cast::<T>(), Self::LENGTH) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut((self as *mut Self).cast::<T>(), Self::LENGTH) }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct Array3<T: Copy> {
    _e0: T,
    _other: Array2<T>,
}

impl<T: Copy> Array3<T> {
    pub const LENGTH: usize = 3;
}

impl<T: Copy> InlineArray<T> for Array3<T> {
    fn len(&self) -> usize {
        Self::LENGTH
    }

    fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts((self as *const Self).cast::<T>(), Self::LENGTH) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut((self as *mut Self).cast::<T>(), Self::LENGTH) }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct Array4<T: Copy> {
    _e0: T,
    _other: Array3<T>,
}

impl<T: Copy> Array4<T> {
    pub const LENGTH: usize = 4;
}

impl<T: Copy> InlineArray<T> for Array4<T> {
    fn len(&self) -> usize {
        Self::LENGTH
    }

    fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts((self as *const Self).cast::<T>(), Self::LENGTH) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut((self as *mut Self).cast::<T>(), Self::LENGTH) }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct Array7<T: Copy> {
    _e0: T,
    _other: Array4<T>,
    _other2: Array2<T>,
}

impl<T: Copy> Array7<T> {
    pub const LENGTH: usize = 7;
}

impl<T: Copy> InlineArray<T> for Array7<T> {
    fn len(&self) -> usize {
        Self::LENGTH
    }

    fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts((self as *const Self).cast::<T>(), Self::LENGTH) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut((self as *mut Self).cast::<T>(), Self::LENGTH) }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct Array9<T: Copy> {
    _e0: T,
    _other: Array7<T>,
    _e2: T,
}

impl<T: Copy> Array9<T> {
    pub const LENGTH: usize = 9;
}

impl<T: Copy> InlineArray<T> for Array9<T> {
    fn len(&self) -> usize {
        Self::LENGTH
    }

    fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts((self as *const Self).cast::<T>(), Self::LENGTH) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut((self as *mut Self).cast::<T>(), Self::LENGTH) }
    }
}
